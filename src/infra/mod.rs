//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and repositories
//! - Redis cache and session storage
//! - Unit of Work for repository access and transactions
//! - Master data seeding

pub mod cache;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod session;
pub mod unit_of_work;

pub use cache::Cache;
pub use db::{Database, Migrator};
pub use repositories::{
    CategoryRepository, ClientRepository, DepartmentRepository, LeadRepository, PetRepository,
    RoleRepository, ServiceRepository, UserRepository, VisitRepository,
};
pub use seed::seed_master_data;
pub use session::{MemorySessionStore, Principal, RedisSessionStore, SessionStore};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCategoryRepository, MockClientRepository, MockDepartmentRepository, MockLeadRepository,
    MockPetRepository, MockRoleRepository, MockServiceRepository, MockUserRepository,
    MockVisitRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use session::MockSessionStore;
