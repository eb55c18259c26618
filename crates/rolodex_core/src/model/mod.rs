//! Domain model for tracked relationships.
//!
//! # Responsibility
//! - Define the canonical contact/note records shared by all store callers.
//! - Keep the serialized shape identical to the persisted JSON document.
//!
//! # Invariants
//! - Every contact is identified by a stable string `ContactId`.
//! - Notes are append-only within a contact's lifetime.

pub mod contact;
