//! Domain layer - Core business entities and logic
//!
//! Entities as returned by the API, their input payloads and the
//! value objects shared by every layer above.

pub mod access;
pub mod category;
pub mod client;
pub mod department;
pub mod lead;
pub mod password;
pub mod pet;
pub mod role;
pub mod service;
pub mod slug;
pub mod user;
pub mod validation;
pub mod visit;

pub use access::AccessLevel;
pub use category::{Category, CategoryInput};
pub use client::{Client, ClientInput};
pub use department::{Department, DepartmentInput};
pub use lead::{Lead, LeadInput};
pub use password::Password;
pub use pet::{Pet, PetInput};
pub use role::{Role, RoleInput};
pub use service::{Service, ServiceInput};
pub use user::{CreateUser, LoginRequest, NewUser, UpdatePassword, UpdateUser, User};
pub use visit::{Visit, VisitInput};
