//! acuity-autofill
//!
//! AI answer extraction for clinical scales: the inference-service seam,
//! the extraction prompt, tolerant parsing of model output, and the
//! merge semantics for reconciling suggestions into a live answer set.
//! The inference call itself lives behind [`service::AutofillService`].

pub mod error;
pub mod merge;
pub mod parse;
pub mod prompt;
pub mod service;
