//! Service Container - Centralized service access.
//!
//! Handlers only see [`ServiceContainer`], so API tests can swap in
//! `MockServiceContainer` without a database.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CatalogManager, CatalogService, CategoryManager,
    CategoryService, ClientManager, ClientService, DepartmentManager, DepartmentService,
    LeadManager, LeadService, PetManager, PetService, RoleManager, RoleService, UserManager,
    UserService, VisitManager, VisitService,
};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn roles(&self) -> Arc<dyn RoleService>;
    fn users(&self) -> Arc<dyn UserService>;
    fn departments(&self) -> Arc<dyn DepartmentService>;
    fn categories(&self) -> Arc<dyn CategoryService>;
    fn services(&self) -> Arc<dyn CatalogService>;
    fn clients(&self) -> Arc<dyn ClientService>;
    fn pets(&self) -> Arc<dyn PetService>;
    fn visits(&self) -> Arc<dyn VisitService>;
    fn leads(&self) -> Arc<dyn LeadService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth: Arc<dyn AuthService>,
    roles: Arc<dyn RoleService>,
    users: Arc<dyn UserService>,
    departments: Arc<dyn DepartmentService>,
    categories: Arc<dyn CategoryService>,
    services: Arc<dyn CatalogService>,
    clients: Arc<dyn ClientService>,
    pets: Arc<dyn PetService>,
    visits: Arc<dyn VisitService>,
    leads: Arc<dyn LeadService>,
}

impl Services {
    /// Wire every service to one shared Unit of Work
    pub fn new(uow: Arc<Persistence>) -> Self {
        Self {
            auth: Arc::new(Authenticator::new(uow.clone())),
            roles: Arc::new(RoleManager::new(uow.clone())),
            users: Arc::new(UserManager::new(uow.clone())),
            departments: Arc::new(DepartmentManager::new(uow.clone())),
            categories: Arc::new(CategoryManager::new(uow.clone())),
            services: Arc::new(CatalogManager::new(uow.clone())),
            clients: Arc::new(ClientManager::new(uow.clone())),
            pets: Arc::new(PetManager::new(uow.clone())),
            visits: Arc::new(VisitManager::new(uow.clone())),
            leads: Arc::new(LeadManager::new(uow)),
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        Self::new(Arc::new(Persistence::new(db)))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    fn roles(&self) -> Arc<dyn RoleService> {
        self.roles.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentService> {
        self.departments.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.categories.clone()
    }

    fn services(&self) -> Arc<dyn CatalogService> {
        self.services.clone()
    }

    fn clients(&self) -> Arc<dyn ClientService> {
        self.clients.clone()
    }

    fn pets(&self) -> Arc<dyn PetService> {
        self.pets.clone()
    }

    fn visits(&self) -> Arc<dyn VisitService> {
        self.visits.clone()
    }

    fn leads(&self) -> Arc<dyn LeadService> {
        self.leads.clone()
    }
}
