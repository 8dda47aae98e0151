//! Repository layer - Data access abstraction
//!
//! One narrow repository per aggregate. Every write runs in its own
//! transaction and every read skips soft-deleted rows.

pub(crate) mod base;
pub(crate) mod entities;

mod category_repository;
mod client_repository;
mod department_repository;
mod lead_repository;
mod pet_repository;
mod role_repository;
mod service_repository;
mod user_repository;
mod visit_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use client_repository::{ClientRepository, ClientStore};
pub use department_repository::{DepartmentRepository, DepartmentStore};
pub use lead_repository::{LeadRepository, LeadStore};
pub use pet_repository::{PetRepository, PetStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use service_repository::{ServiceRepository, ServiceStore};
pub use user_repository::{UserRepository, UserStore};
pub use visit_repository::{VisitRepository, VisitStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use client_repository::MockClientRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use department_repository::MockDepartmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use lead_repository::MockLeadRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use pet_repository::MockPetRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service_repository::MockServiceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use visit_repository::MockVisitRepository;
