//! Contact and interaction-note records.
//!
//! # Responsibility
//! - Define the persisted contact schema (camelCase JSON, ISO-8601 dates).
//! - Provide label normalization shared by tags and note topics.
//!
//! # Invariants
//! - `id` is stable and never reused for another contact.
//! - Date fields are carried as raw strings so malformed persisted values
//!   round-trip unchanged; interpretation lives in `schedule::dates`.
//! - `tags`/`topics` hold no duplicates and no blank entries after
//!   normalization; first-occurrence order is preserved for display.

use serde::{Deserialize, Serialize};

/// Stable identifier for a contact record.
///
/// Kept as a string alias: ids in the persisted document are arbitrary
/// strings (seeded records use "1".."3", generated records use UUIDs).
pub type ContactId = String;

/// Stable identifier for a note within its parent contact.
pub type NoteId = String;

/// Interaction channel recorded on a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    /// In-person or scheduled meeting.
    Meeting,
    /// Phone or video call.
    Call,
    /// Email exchange.
    Email,
    /// Anything else worth logging.
    Other,
}

/// Timestamped log entry of one interaction with a contact.
///
/// Notes are append-only: once added they are never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique within the parent contact's note collection.
    pub id: NoteId,
    /// Free-form body text. Required, non-empty by caller contract.
    pub content: String,
    /// Interaction date, ISO-8601 string.
    pub date: String,
    /// Serialized as `type` to match the persisted schema.
    #[serde(rename = "type")]
    pub kind: NoteType,
    /// Where the interaction took place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form topic labels, normalized like tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// A tracked professional relationship record.
///
/// Field names serialize as camelCase to match the persisted document
/// produced by earlier versions of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable id, unique across the store.
    pub id: ContactId,
    /// Display name. Non-emptiness is a presentation-layer contract; the
    /// store does not reject empty names.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Most recent interaction date. Bumped monotonically by note addition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<String>,
    /// Scheduled follow-up date, derived or user-set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_contact_date: Option<String>,
    /// Interaction log, insertion order as stored.
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Categorical labels, display order preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Creation timestamp, immutable after `add`.
    pub created_at: String,
    /// Refreshed on every mutation. Always >= `created_at`.
    pub updated_at: String,
}

/// Caller-supplied fields for creating a contact.
///
/// The store assigns `id`, `created_at` and `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    #[serde(default)]
    pub linked_in_url: Option<String>,
    #[serde(default)]
    pub linked_in_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub last_contact_date: Option<String>,
    #[serde(default)]
    pub next_contact_date: Option<String>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Caller-supplied fields for appending a note.
///
/// The store assigns the note `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub content: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: NoteType,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

/// Normalizes one label value according to the tag/topic contract.
///
/// Returns `None` for empty or whitespace-only input. Case is preserved.
pub fn normalize_label(label: &str) -> Option<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes and deduplicates label values.
///
/// Duplicates are removed by case-sensitive exact match, keeping the first
/// occurrence so display order stays what the caller entered.
pub fn normalize_labels(labels: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for label in labels {
        if let Some(value) = normalize_label(label) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::{normalize_label, normalize_labels, Contact, NoteType};

    #[test]
    fn normalize_label_rejects_blank_values() {
        assert_eq!(normalize_label("   "), None);
        assert_eq!(normalize_label(""), None);
        assert_eq!(normalize_label("  tech "), Some("tech".to_string()));
    }

    #[test]
    fn normalize_labels_deduplicates_case_sensitively_preserving_order() {
        let labels = vec![
            "Design".to_string(),
            "design".to_string(),
            " ".to_string(),
            "Design".to_string(),
            "tech".to_string(),
        ];
        assert_eq!(
            normalize_labels(&labels),
            vec![
                "Design".to_string(),
                "design".to_string(),
                "tech".to_string()
            ]
        );
    }

    #[test]
    fn contact_round_trips_persisted_camel_case_schema() {
        let document = r#"{
            "id": "1",
            "name": "Alex Johnson",
            "linkedInUrl": "https://linkedin.com/in/alexjohnson",
            "linkedInUsername": "alexjohnson",
            "email": "alex@example.com",
            "company": "TechCorp",
            "position": "Product Manager",
            "lastContactDate": "2023-05-15",
            "nextContactDate": "2023-08-15",
            "profileImage": "https://randomuser.me/api/portraits/men/32.jpg",
            "notes": [
                {
                    "id": "1-1",
                    "content": "Met at TechConf 2023.",
                    "date": "2023-05-15",
                    "type": "meeting",
                    "location": "San Francisco",
                    "topics": ["product launch", "collaboration"]
                }
            ],
            "tags": ["tech", "product"],
            "createdAt": "2023-01-10",
            "updatedAt": "2023-05-15"
        }"#;

        let contact: Contact = serde_json::from_str(document).unwrap();
        assert_eq!(contact.id, "1");
        assert_eq!(contact.linked_in_username.as_deref(), Some("alexjohnson"));
        assert_eq!(contact.notes.len(), 1);
        assert_eq!(contact.notes[0].kind, NoteType::Meeting);

        let serialized = serde_json::to_value(&contact).unwrap();
        assert_eq!(serialized["lastContactDate"], "2023-05-15");
        assert_eq!(serialized["notes"][0]["type"], "meeting");
        assert!(serialized.get("phone").is_none());

        let reparsed: Contact = serde_json::from_value(serialized).unwrap();
        assert_eq!(reparsed, contact);
    }
}
