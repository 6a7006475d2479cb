//! Item Domain Models
//!
//! This module contains the data structures of the item resource: the stored
//! record, the candidate handed to the store, and the request payload it is
//! parsed from.

use serde::{de::IgnoredAny, Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Item Domain Models
// =============================================================================

/// A stored item, as returned by every item endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Identifier generated by the store on creation
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Optional free-form description, serialized as `null` when absent
    pub description: Option<String>,
}

/// A validated candidate for insertion into the store
///
/// Carries no identifier: the store always assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

/// Body of `POST /items`
///
/// `name` is required; a missing or non-string `name` fails deserialization.
/// A client-supplied `id` of any JSON type is accepted so that echoing a
/// previously returned record back is not an error, but it never reaches the
/// store.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    /// Ignored on create
    #[serde(default)]
    pub id: Option<IgnoredAny>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl ItemPayload {
    /// Parses a request body that is already known to be a JSON object.
    ///
    /// Taking a `Map` keeps array bodies from being read positionally.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(object))
    }
}

impl From<ItemPayload> for NewItem {
    fn from(payload: ItemPayload) -> Self {
        NewItem {
            name: payload.name,
            description: payload.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_requires_name() {
        let result = serde_json::from_value::<ItemPayload>(json!({ "description": "no name" }));
        assert!(result.is_err());
    }

    #[test]
    fn payload_rejects_non_string_name() {
        let result = serde_json::from_value::<ItemPayload>(json!({ "name": 42 }));
        assert!(result.is_err());
    }

    #[test]
    fn payload_accepts_null_description() {
        let payload: ItemPayload =
            serde_json::from_value(json!({ "name": "Widget", "description": null })).unwrap();
        assert_eq!(payload.description, None);
    }

    #[test]
    fn supplied_id_is_dropped_from_candidate() {
        let payload: ItemPayload =
            serde_json::from_value(json!({ "id": "mine", "name": "Widget" })).unwrap();
        assert!(payload.id.is_some());

        let candidate = NewItem::from(payload);
        assert_eq!(candidate, NewItem::new("Widget", None));
    }

    #[test]
    fn supplied_id_of_any_type_is_accepted() {
        for id in [json!(5), json!(true), json!({ "nested": 1 }), json!(null)] {
            let object = json!({ "id": id, "name": "Widget" });
            let Value::Object(object) = object else {
                unreachable!()
            };
            let payload = ItemPayload::from_object(object).unwrap();
            assert_eq!(NewItem::from(payload), NewItem::new("Widget", None));
        }
    }

    #[test]
    fn from_object_requires_name() {
        let mut object = Map::new();
        object.insert("description".into(), json!("no name"));

        let err = ItemPayload::from_object(object).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn item_serializes_missing_description_as_null() {
        let item = Item {
            id: "abc".into(),
            name: "Widget".into(),
            description: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({ "id": "abc", "name": "Widget", "description": null })
        );
    }
}
