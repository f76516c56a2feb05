//! acuity-core
//!
//! Pure domain types for clinical scale scoring. No async, no I/O —
//! this is the shared vocabulary of the Acuity system.

pub mod error;
pub mod models;
