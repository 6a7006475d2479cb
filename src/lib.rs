//! Workshop API Library
//!
//! This library provides a small HTTP service that creates, lists and fetches
//! items held in an in-memory store, plus a static landing page.

/// Service title shown on the landing page and in startup logs
pub const SERVICE_TITLE: &str = "Workshop API";
/// One-line service description
pub const SERVICE_DESCRIPTION: &str = "A demo API for GitHub CI/CD workshop";
/// Service version
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Domain modules
pub mod greeting;
pub mod items;

// Infrastructure
pub mod config;
pub mod error;
pub mod observability;
pub mod router;
pub mod state;
