//! The per-scale completion state machine.
//!
//! Replaces ad hoc per-render boolean scans with an explicit state
//! derived from `(answered, is_complete, is_saved)` and an event
//! computed from the state an edit lands in. That event is the only
//! trigger for persistence.

use serde::Serialize;

/// Completion lifecycle for a single scale.
///
/// `NotStarted → InProgress → CompleteUnsaved → CompleteSaved`; any
/// edit while saved re-evaluates completeness and moves back to
/// `CompleteUnsaved` (forcing a fresh save) or `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    NotStarted,
    InProgress,
    CompleteUnsaved,
    CompleteSaved,
}

/// Derive the completion state from the observable facts.
pub fn completion_state(answered: usize, is_complete: bool, is_saved: bool) -> CompletionState {
    match (answered, is_complete, is_saved) {
        // An untouched scale is NotStarted even when every question is
        // optional and completeness holds vacuously.
        (0, _, _) => CompletionState::NotStarted,
        (_, false, _) => CompletionState::InProgress,
        (_, true, false) => CompletionState::CompleteUnsaved,
        (_, true, true) => CompletionState::CompleteSaved,
    }
}

/// Event produced by the state an edit lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    None,
    /// The edit left the scale complete and unsaved. Emitted on entry
    /// into `CompleteUnsaved` and again on every edit while there, so
    /// an edit after a failed save re-requests persistence. The save
    /// coordinator's `is_saving`/`is_saved` guards collapse duplicate
    /// events into a single request.
    SaveNeeded,
}

pub fn save_event(after: CompletionState) -> StateEvent {
    if after == CompletionState::CompleteUnsaved {
        StateEvent::SaveNeeded
    } else {
        StateEvent::None
    }
}
