//! Unit of Work pattern implementation.
//!
//! Centralizes access to every repository and owns the single transaction
//! helper all multi-step writes go through.

use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    CategoryRepository, CategoryStore, ClientRepository, ClientStore, DepartmentRepository,
    DepartmentStore, LeadRepository, LeadStore, PetRepository, PetStore, RoleRepository,
    RoleStore, ServiceRepository, ServiceStore, UserRepository, UserStore, VisitRepository,
    VisitStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Services depend on this instead of on concrete stores, so tests can
/// hand them mocked repositories.
pub trait UnitOfWork: Send + Sync {
    fn roles(&self) -> Arc<dyn RoleRepository>;
    fn categories(&self) -> Arc<dyn CategoryRepository>;
    fn services(&self) -> Arc<dyn ServiceRepository>;
    fn departments(&self) -> Arc<dyn DepartmentRepository>;
    fn clients(&self) -> Arc<dyn ClientRepository>;
    fn pets(&self) -> Arc<dyn PetRepository>;
    fn users(&self) -> Arc<dyn UserRepository>;
    fn visits(&self) -> Arc<dyn VisitRepository>;
    fn leads(&self) -> Arc<dyn LeadRepository>;
}

/// Concrete implementation of UnitOfWork
#[derive(Clone)]
pub struct Persistence {
    roles: Arc<RoleStore>,
    categories: Arc<CategoryStore>,
    services: Arc<ServiceStore>,
    departments: Arc<DepartmentStore>,
    clients: Arc<ClientStore>,
    pets: Arc<PetStore>,
    users: Arc<UserStore>,
    visits: Arc<VisitStore>,
    leads: Arc<LeadStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            roles: Arc::new(RoleStore::new(db.clone())),
            categories: Arc::new(CategoryStore::new(db.clone())),
            services: Arc::new(ServiceStore::new(db.clone())),
            departments: Arc::new(DepartmentStore::new(db.clone())),
            clients: Arc::new(ClientStore::new(db.clone())),
            pets: Arc::new(PetStore::new(db.clone())),
            users: Arc::new(UserStore::new(db.clone())),
            visits: Arc::new(VisitStore::new(db.clone())),
            leads: Arc::new(LeadStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn roles(&self) -> Arc<dyn RoleRepository> {
        self.roles.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.categories.clone()
    }

    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.services.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.departments.clone()
    }

    fn clients(&self) -> Arc<dyn ClientRepository> {
        self.clients.clone()
    }

    fn pets(&self) -> Arc<dyn PetRepository> {
        self.pets.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn visits(&self) -> Arc<dyn VisitRepository> {
        self.visits.clone()
    }

    fn leads(&self) -> Arc<dyn LeadRepository> {
        self.leads.clone()
    }
}

/// Begin a read-committed, read-write transaction.
pub async fn begin(db: &DatabaseConnection) -> AppResult<DatabaseTransaction> {
    db.begin_with_config(
        Some(IsolationLevel::ReadCommitted),
        Some(AccessMode::ReadWrite),
    )
    .await
    .map_err(AppError::from)
}

/// Commit on success, roll back on error.
pub async fn finish<T>(txn: DatabaseTransaction, result: AppResult<T>) -> AppResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Run one transactional step against a fresh transaction.
///
/// ```rust,ignore
/// let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
/// ```
#[macro_export]
macro_rules! with_transaction {
    ($db:expr, |$txn:ident| $step:expr) => {{
        let $txn = $crate::infra::unit_of_work::begin($db).await?;
        let result = $step.await;
        $crate::infra::unit_of_work::finish($txn, result).await
    }};
}
