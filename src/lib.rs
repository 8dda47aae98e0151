//! Vet Clinic API - administration backend for a veterinary clinic.
//!
//! Staff log in with a session cookie and manage roles, users,
//! departments, service categories, services, clients, pets, visits and
//! leads over a JSON REST API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, payloads, validation rules and value objects
//! - **services**: Application use cases
//! - **infra**: Database, repositories, sessions, seeding
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server with config/develop.yml
//! cargo run -- serve
//!
//! # Run migrations against config/production.yml
//! cargo run -- --env production migrate up
//!
//! # Insert master data
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{AccessLevel, Password, User};
pub use errors::{AppError, AppResult};
