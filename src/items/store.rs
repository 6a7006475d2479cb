//! In-memory Item Store
//!
//! The store is the single owner of every item record. Items live in an
//! insertion-ordered `Vec` behind one read/write lock; readers get cloned
//! snapshots and never hold the lock across an await point.

use super::helpers::{generate_item_id, seed_items};
use super::models::{Item, NewItem};
use parking_lot::RwLock;
use thiserror::Error;

/// Errors signalled by [`ItemStore`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no item with id {id}")]
    NotFound { id: String },
}

#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the two startup items
    pub fn seeded() -> Self {
        let store = Self::new();
        for candidate in seed_items() {
            store.create(candidate);
        }
        store
    }

    /// Returns every item in insertion order, as of the time of the call.
    pub fn list(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// Stores `candidate` under a newly generated identifier and returns the
    /// stored record.
    pub fn create(&self, candidate: NewItem) -> Item {
        let mut items = self.items.write();

        // v4 collisions are not expected, but ids must stay unique.
        let id = loop {
            let id = generate_item_id();
            if !items.iter().any(|i| i.id == id) {
                break id;
            }
        };

        let item = Item {
            id,
            name: candidate.name,
            description: candidate.description,
        };
        items.push(item.clone());

        tracing::debug!(item_id = %item.id, total = items.len(), "item created");
        item
    }

    /// Returns the first item whose id equals `id`.
    pub fn get_by_id(&self, id: &str) -> Result<Item, StoreError> {
        self.items
            .read()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| {
                tracing::debug!(item_id = %id, "item lookup missed");
                StoreError::NotFound { id: id.to_string() }
            })
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
