//! Application services layer - Use cases and business logic.
//!
//! Services take raw path parameters from handlers, resolve them to IDs or
//! slugs, and delegate to the repositories behind the Unit of Work.
//! Every failure is logged before it is returned.

mod auth_service;
mod catalog_service;
mod category_service;
mod client_service;
pub mod container;
mod department_service;
mod lead_service;
pub mod lookup;
mod pet_service;
mod role_service;
mod user_service;
mod visit_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use catalog_service::{CatalogManager, CatalogService};
pub use category_service::{CategoryManager, CategoryService};
pub use client_service::{ClientManager, ClientService};
pub use department_service::{DepartmentManager, DepartmentService};
pub use lead_service::{LeadManager, LeadService};
pub use pet_service::{PetManager, PetService};
pub use role_service::{RoleManager, RoleService};
pub use user_service::{UserManager, UserService};
pub use visit_service::{VisitManager, VisitService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use catalog_service::MockCatalogService;
#[cfg(any(test, feature = "test-utils"))]
pub use category_service::MockCategoryService;
#[cfg(any(test, feature = "test-utils"))]
pub use client_service::MockClientService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use department_service::MockDepartmentService;
#[cfg(any(test, feature = "test-utils"))]
pub use lead_service::MockLeadService;
#[cfg(any(test, feature = "test-utils"))]
pub use pet_service::MockPetService;
#[cfg(any(test, feature = "test-utils"))]
pub use role_service::MockRoleService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
#[cfg(any(test, feature = "test-utils"))]
pub use visit_service::MockVisitService;
