//! Contact store: CRUD and follow-up queries over one persisted document.
//!
//! # Responsibility
//! - Own the read-modify-write cycle against the injected storage backend.
//! - Assign ids and timestamps, maintain derived fields, surface semantic
//!   errors.
//!
//! # Invariants
//! - Contact ids are unique across the store; note ids within their contact.
//! - `updated_at` is refreshed on every mutation and never precedes
//!   `created_at`.
//! - `last_contact_date` only moves forward when notes are added.
//! - Every operation locks the backend for its whole read-modify-write, so
//!   concurrent callers cannot lose updates on the shared document.

use crate::model::contact::{
    normalize_labels, Contact, ContactId, NewContact, NewNote, Note,
};
use crate::schedule::dates::{parse_date, DateParse};
use crate::storage::{Storage, StorageError};
use crate::store::ids::{IdGenerator, UuidIdGenerator};
use crate::store::seed::sample_contacts;
use chrono::{Local, NaiveDateTime, SecondsFormat, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, PoisonError};

/// Logical key the application stores its contact document under.
///
/// Kept as a suggested default only; the key is always a constructor
/// parameter so independent store instances can coexist.
pub const DEFAULT_DOCUMENT_KEY: &str = "personal-networking-crm";

pub type StoreResult<T> = Result<T, StoreError>;

/// Contact store error taxonomy.
#[derive(Debug)]
pub enum StoreError {
    /// The targeted contact id does not exist. Nothing was persisted.
    NotFound(ContactId),
    /// The storage backend failed to read or write the document.
    Persistence(StorageError),
    /// The persisted document is not a valid contact collection.
    Corrupt(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
            Self::Corrupt(err) => write!(f, "corrupt contact document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
            Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Persistence(value)
    }
}

/// CRUD store over a single persisted contact collection.
///
/// All operations are synchronous single attempts: load the whole document,
/// mutate in memory, write the whole document back. A mutex serializes that
/// cycle so the single-writer assumption of the document format holds in
/// multi-threaded callers.
pub struct ContactStore<S: Storage> {
    storage: Mutex<S>,
    document_key: String,
    ids: Box<dyn IdGenerator + Send + Sync>,
}

impl<S: Storage> ContactStore<S> {
    /// Creates a store over `storage`, persisting under `document_key`.
    ///
    /// Ids come from the default random UUID generator.
    pub fn new(storage: S, document_key: impl Into<String>) -> Self {
        Self::with_id_generator(storage, document_key, Box::new(UuidIdGenerator))
    }

    /// Creates a store with an injected id generator.
    pub fn with_id_generator(
        storage: S,
        document_key: impl Into<String>,
        ids: Box<dyn IdGenerator + Send + Sync>,
    ) -> Self {
        Self {
            storage: Mutex::new(storage),
            document_key: document_key.into(),
            ids,
        }
    }

    /// Loads the full collection.
    ///
    /// On first-ever access (no persisted document) this seeds and persists
    /// the fixed sample contacts, then returns them. The lazy seed is the
    /// only side effect a read can have.
    pub fn list(&self) -> StoreResult<Vec<Contact>> {
        let mut storage = self.lock_storage();
        self.load_or_seed(&mut storage)
    }

    /// Atomically replaces the entire persisted collection.
    pub fn save(&self, contacts: &[Contact]) -> StoreResult<()> {
        let mut storage = self.lock_storage();
        self.persist(&mut storage, contacts)
    }

    /// Creates a contact from caller-supplied fields.
    ///
    /// Assigns a fresh id, normalizes tags, defaults notes/tags to empty and
    /// stamps `created_at == updated_at == now`. Name non-emptiness is a
    /// presentation-layer contract and is deliberately not enforced here.
    pub fn add(&self, new: NewContact) -> StoreResult<Contact> {
        let mut storage = self.lock_storage();
        let mut contacts = self.load_or_seed(&mut storage)?;

        let now = now_timestamp();
        let contact = Contact {
            id: self.ids.next_id(),
            name: new.name,
            linked_in_url: new.linked_in_url,
            linked_in_username: new.linked_in_username,
            email: new.email,
            phone: new.phone,
            company: new.company,
            position: new.position,
            last_contact_date: new.last_contact_date,
            next_contact_date: new.next_contact_date,
            notes: new.notes,
            tags: normalize_labels(&new.tags),
            profile_image: new.profile_image,
            created_at: now.clone(),
            updated_at: now,
        };

        contacts.push(contact.clone());
        self.persist(&mut storage, &contacts)?;
        info!(
            "event=contact_add module=store status=ok contact_id={} total={}",
            contact.id,
            contacts.len()
        );
        Ok(contact)
    }

    /// Replaces an existing contact wholesale, stamping `updated_at`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no contact has the given id; the
    ///   persisted collection is left untouched.
    pub fn update(&self, contact: &Contact) -> StoreResult<Contact> {
        let mut storage = self.lock_storage();
        let mut contacts = self.load_or_seed(&mut storage)?;

        let Some(index) = contacts.iter().position(|c| c.id == contact.id) else {
            return Err(StoreError::NotFound(contact.id.clone()));
        };

        let mut updated = contact.clone();
        updated.updated_at = now_timestamp();
        contacts[index] = updated.clone();
        self.persist(&mut storage, &contacts)?;
        info!(
            "event=contact_update module=store status=ok contact_id={}",
            updated.id
        );
        Ok(updated)
    }

    /// Removes the contact with the given id, if present.
    ///
    /// Deleting an unknown id is a silent no-op; delete is idempotent.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut storage = self.lock_storage();
        let mut contacts = self.load_or_seed(&mut storage)?;

        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        self.persist(&mut storage, &contacts)?;
        info!(
            "event=contact_delete module=store status=ok contact_id={id} removed={}",
            before - contacts.len()
        );
        Ok(())
    }

    /// Appends a note to a contact's interaction log.
    ///
    /// Stamps the contact's `updated_at` and bumps `last_contact_date` when
    /// the note's date is strictly more recent than the current value (or
    /// when no value is set yet).
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the contact id does not exist.
    pub fn add_note(&self, contact_id: &str, new: NewNote) -> StoreResult<Note> {
        let mut storage = self.lock_storage();
        let mut contacts = self.load_or_seed(&mut storage)?;

        let Some(contact) = contacts.iter_mut().find(|c| c.id == contact_id) else {
            return Err(StoreError::NotFound(contact_id.to_string()));
        };

        let note = Note {
            id: self.ids.next_id(),
            content: new.content,
            date: new.date,
            kind: new.kind,
            location: new.location,
            topics: new.topics.as_deref().map(normalize_labels),
        };

        if should_bump_last_contact(contact.last_contact_date.as_deref(), &note.date) {
            contact.last_contact_date = Some(note.date.clone());
        }
        contact.notes.push(note.clone());
        contact.updated_at = now_timestamp();

        let contact_id = contact.id.clone();
        self.persist(&mut storage, &contacts)?;
        info!(
            "event=note_add module=store status=ok contact_id={contact_id} note_id={}",
            note.id
        );
        Ok(note)
    }

    /// Single-record lookup. Returns `None` on miss; absence is not an error.
    pub fn get(&self, id: &str) -> StoreResult<Option<Contact>> {
        let mut storage = self.lock_storage();
        let contacts = self.load_or_seed(&mut storage)?;
        Ok(contacts.into_iter().find(|c| c.id == id))
    }

    /// Filters the collection to contacts whose follow-up date has arrived.
    ///
    /// A contact is due when its `next_contact_date` parses and is less than
    /// or equal to now (inclusive). Collection order is preserved. Cheap to
    /// poll repeatedly: after the one-time seed this is a pure read.
    pub fn due_for_follow_up(&self) -> StoreResult<Vec<Contact>> {
        self.due_for_follow_up_at(Local::now().naive_local())
    }

    /// Clock-injected variant of [`ContactStore::due_for_follow_up`].
    pub fn due_for_follow_up_at(&self, now: NaiveDateTime) -> StoreResult<Vec<Contact>> {
        let mut storage = self.lock_storage();
        let contacts = self.load_or_seed(&mut storage)?;
        Ok(contacts
            .into_iter()
            .filter(|contact| {
                parse_date(contact.next_contact_date.as_deref())
                    .valid()
                    .is_some_and(|due| due <= now)
            })
            .collect())
    }

    fn lock_storage(&self) -> std::sync::MutexGuard<'_, S> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_or_seed(&self, storage: &mut S) -> StoreResult<Vec<Contact>> {
        match storage.read(&self.document_key)? {
            Some(document) => serde_json::from_str(&document).map_err(StoreError::Corrupt),
            None => {
                let seeded = sample_contacts();
                self.persist(storage, &seeded)?;
                info!(
                    "event=store_seed module=store status=ok key={} count={}",
                    self.document_key,
                    seeded.len()
                );
                Ok(seeded)
            }
        }
    }

    fn persist(&self, storage: &mut S, contacts: &[Contact]) -> StoreResult<()> {
        let document = serde_json::to_string(contacts).map_err(StoreError::Corrupt)?;
        storage.write(&self.document_key, &document)?;
        Ok(())
    }
}

/// Monotonic `last_contact_date` rule.
///
/// Bump when no value is set yet, or when both dates parse and the note's
/// date is strictly later. A current value that no longer parses is never
/// overwritten by comparison.
fn should_bump_last_contact(current: Option<&str>, note_date: &str) -> bool {
    match parse_date(current) {
        DateParse::Missing => true,
        DateParse::Invalid => false,
        DateParse::Valid(last) => parse_date(Some(note_date))
            .valid()
            .is_some_and(|note| note > last),
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
