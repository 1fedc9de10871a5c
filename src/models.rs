// Data models for Taskpad

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single to-do item.
///
/// The stored form is a JSON object with `id`, `text`, `completed` and
/// `category` fields. Data written by older or foreign tools may carry
/// numeric ids or omit the optional fields; deserialization normalizes
/// both cases and ignores unknown fields. `id` and `text` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the collection for the task's lifetime.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Opaque caller-defined tag, e.g. a palette index. Never range-checked.
    #[serde(default)]
    pub category: Option<u32>,
}

impl Task {
    /// A fresh, not-yet-completed task with a generated id.
    pub(crate) fn new(text: String, category: Option<u32>) -> Self {
        Self {
            id: fresh_id(),
            text,
            completed: false,
            category,
        }
    }
}

/// Generate a collision-free task id (UUIDv7, so ids sort by creation time).
pub(crate) fn fresh_id() -> String {
    Uuid::now_v7().to_string()
}

/// Accept `"42"` as well as `42` for the `id` field.
///
/// Numeric ids are normalized to their decimal string form; ids are always
/// written back as strings.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Int(n) => n.to_string(),
        IdRepr::Float(n) => n.to_string(),
    })
}

/// One-pass tally of a collection, for "N items left"-style displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}
