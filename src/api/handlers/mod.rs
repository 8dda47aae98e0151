//! HTTP request handlers.
//!
//! Every protected handler checks Staff first (401) and then its own
//! minimum level (403) before touching a service.

pub mod auth_handler;
pub mod category_handler;
pub mod client_handler;
pub mod department_handler;
pub mod lead_handler;
pub mod pet_handler;
pub mod role_handler;
pub mod service_handler;
pub mod system_handler;
pub mod user_handler;
pub mod visit_handler;

pub use auth_handler::{auth_routes, profile_routes};
pub use category_handler::category_routes;
pub use client_handler::client_routes;
pub use department_handler::department_routes;
pub use lead_handler::lead_routes;
pub use pet_handler::pet_routes;
pub use role_handler::role_routes;
pub use service_handler::service_routes;
pub use system_handler::system_routes;
pub use user_handler::user_routes;
pub use visit_handler::visit_routes;
