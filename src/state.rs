//! Application State Management
//!
//! This module owns the state shared by every request handler: the item store
//! and the location of the landing-page template.

use crate::config::AppConfig;
use crate::items::ItemStore;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing items and template information
pub struct AppState {
    /// In-memory item storage, seeded at startup.
    pub items: ItemStore,

    /// Path to the directory containing HTML templates.
    pub templates_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with the seed items and locates the templates directory
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_templates_dir(Self::locate_templates_directory(&current_dir))
    }

    /// Creates a new AppState with the seed items and an explicit templates directory
    pub fn with_templates_dir(templates_dir: impl Into<PathBuf>) -> Self {
        let templates_dir = templates_dir.into();
        tracing::debug!(path = %templates_dir.display(), "using templates directory");

        Self {
            items: ItemStore::seeded(),
            templates_dir,
        }
    }

    /// Creates a new AppState honouring `TEMPLATES_DIR` when configured
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.templates_dir {
            Some(dir) => Self::with_templates_dir(dir.clone()),
            None => Self::new(),
        }
    }

    /// Attempts to locate the templates directory using a multi-step strategy
    fn locate_templates_directory(current_dir: &Path) -> PathBuf {
        // 1. ./templates
        // 2. ../templates (if running from a subdir)
        // 3. Fallback to "templates" relative path

        if current_dir.join("templates").exists() {
            return current_dir.join("templates");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("templates").exists() {
                return parent.join("templates");
            }
        }

        PathBuf::from("templates")
    }
}
