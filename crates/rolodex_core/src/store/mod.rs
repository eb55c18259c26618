//! Contact store orchestration over injected storage.
//!
//! # Responsibility
//! - Provide the CRUD and follow-up query surface consumed by presentation
//!   layers.
//! - Keep document (de)serialization and id assignment inside the boundary.
//!
//! # Invariants
//! - Every operation is one guarded read-modify-write of the whole document.
//! - Store APIs return semantic errors (`NotFound`) in addition to
//!   persistence transport errors.

pub mod contact_store;
pub mod ids;
pub mod seed;
