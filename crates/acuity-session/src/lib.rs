//! acuity-session
//!
//! The scale section orchestrator: resolves which scales apply to the
//! active patient/visit context, tracks per-scale answer and completion
//! state, coordinates exactly-one-save-per-completion against a
//! [`store::ResultStore`], reconciles AI suggestions via a
//! [`acuity_autofill::service::AutofillService`], and annotates scores
//! with cross-visit trends. Rendering and input capture live in the
//! consuming UI layer.

pub mod config;
pub mod error;
pub mod machine;
pub mod note;
pub mod session;
pub mod state;
pub mod store;
pub mod trend;
