//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod category;
pub mod client;
pub mod department;
pub mod departments_services;
pub mod lead;
pub mod pet;
pub mod role;
pub mod service;
pub mod user;
pub mod users_departments;
pub mod users_services;
pub mod visit;
