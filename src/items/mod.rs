//! Item Domain Module
//!
//! This module contains all item business logic, including:
//! - Domain models (Item, NewItem, request payload)
//! - Business logic helpers (id generation, seed data)
//! - The in-memory item store
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Item, NewItem};
pub use store::{ItemStore, StoreError};
