//! Item Business Logic Helpers

use super::models::{Item, NewItem};
use uuid::Uuid;

/// Returns a fresh random identifier in hyphenated textual form.
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Items inserted once when the store is created for a running server.
pub fn seed_items() -> Vec<NewItem> {
    vec![
        NewItem::new("Item 1", Some("This is the first item".to_string())),
        NewItem::new("Item 2", Some("This is the second item".to_string())),
    ]
}

/// Produces a human-readable one-line summary for a list of items.
///
/// Example output: `"Item 1, Item 2"`.
pub fn format_item_summary(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
