//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rolodex_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use rolodex_core::{ContactStore, MemoryStorage, DEFAULT_DOCUMENT_KEY};

fn main() {
    println!("rolodex_core ping={}", rolodex_core::ping());
    println!("rolodex_core version={}", rolodex_core::core_version());

    // An empty in-memory store seeds the fixed sample contacts on first read,
    // which makes the count below a stable wiring check.
    let store = ContactStore::new(MemoryStorage::new(), DEFAULT_DOCUMENT_KEY);
    match store.list() {
        Ok(contacts) => println!("rolodex_core seeded_contacts={}", contacts.len()),
        Err(err) => eprintln!("rolodex_core store_error={err}"),
    }
}
