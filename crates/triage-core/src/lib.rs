//! triage-core
//!
//! Pure domain types, column addressing, and phase payload construction.
//! No I/O and no HTTP dependency — this is the shared vocabulary of the
//! triage intake system.

pub mod builder;
pub mod error;
pub mod grid;
pub mod layout;
pub mod models;
pub mod projection;
