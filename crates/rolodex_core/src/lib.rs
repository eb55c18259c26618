//! Core domain logic for Rolodex, a personal contact-relationship tracker.
//! This crate is the single source of truth for business invariants:
//! contact/note records, follow-up scheduling and the persisted document
//! contract.

pub mod linkedin;
pub mod logging;
pub mod model;
pub mod query;
pub mod schedule;
pub mod storage;
pub mod store;

pub use linkedin::extract_username;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{
    normalize_labels, Contact, ContactId, NewContact, NewNote, Note, NoteId, NoteType,
};
pub use query::{search_contacts, sort_contacts, SortKey};
pub use schedule::dates::{
    format_date, is_overdue, next_contact_date, parse_date, relative_time, sort_by_date,
    DateField, DateParse, DEFAULT_FOLLOW_UP_INTERVAL_DAYS,
};
pub use storage::{MemoryStorage, SqliteStorage, Storage, StorageError};
pub use store::contact_store::{ContactStore, StoreError, StoreResult, DEFAULT_DOCUMENT_KEY};
pub use store::ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
