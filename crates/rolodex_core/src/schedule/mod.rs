//! Follow-up scheduling and date presentation helpers.
//!
//! # Responsibility
//! - Interpret the raw date strings carried on contact records.
//! - Provide the pure date arithmetic behind follow-up scheduling.
//!
//! # Invariants
//! - Nothing in this module panics or returns an error for bad input;
//!   malformed dates degrade to sentinel strings or fallback values.

pub mod dates;
