//! Greeting View Module
//!
//! Serves the landing page at `/`.

pub mod handlers;
pub mod view;

pub use handlers::routes;
