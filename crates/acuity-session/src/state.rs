use acuity_core::models::autofill::AutofillResult;
use acuity_core::models::response::ScaleResponses;
use acuity_core::models::result::ScaleResult;
use acuity_core::models::scale::ScaleDefinition;
use acuity_core::models::score::ScoreCalculation;
use acuity_scales::scoring::calculate_score;
use serde::Serialize;

use crate::machine::{completion_state, CompletionState};

/// In-memory state for one scale within the active patient/visit
/// context. Created lazily when the scale becomes relevant or is first
/// expanded; discarded on context change. The persisted result history,
/// not this, is the source of truth across visits.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleState {
    pub scale_id: String,
    pub responses: ScaleResponses,
    pub calculation: ScoreCalculation,
    pub is_expanded: bool,
    pub is_saved: bool,
    /// In-flight guard: a second save trigger while set is a no-op.
    pub is_saving: bool,
    /// In-flight guard for autofill requests.
    pub is_autofilling: bool,
    /// Most recent prior persisted result for this scale, seeded once
    /// per patient context; trend baseline.
    pub previous_result: Option<ScaleResult>,
    /// Canonical record from the latest successful save this visit.
    /// Baseline for subsequent visits, never for the score just
    /// computed.
    pub last_saved: Option<ScaleResult>,
    /// Latest applied autofill result, kept for confidence/reasoning
    /// display.
    pub last_autofill: Option<AutofillResult>,
    /// Inline error message from the latest failed autofill request.
    pub autofill_error: Option<String>,
}

impl ScaleState {
    pub fn new(scale: &ScaleDefinition) -> Self {
        let responses = ScaleResponses::new();
        let calculation = calculate_score(scale, &responses);
        Self {
            scale_id: scale.id.clone(),
            responses,
            calculation,
            is_expanded: false,
            is_saved: false,
            is_saving: false,
            is_autofilling: false,
            previous_result: None,
            last_saved: None,
            last_autofill: None,
            autofill_error: None,
        }
    }

    pub fn completion_state(&self) -> CompletionState {
        completion_state(
            self.calculation.answered_questions,
            self.calculation.is_complete,
            self.is_saved,
        )
    }
}
