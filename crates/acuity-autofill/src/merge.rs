//! Reconciliation of AI suggestions into the live answer set.

use acuity_core::models::autofill::AutofillResult;
use acuity_core::models::response::ScaleResponses;

/// Union an autofill result's responses into the live answer set.
///
/// Inferred values overwrite any existing answer for the same question
/// id, including manually entered ones. Confidence and reasoning are
/// display metadata only and never gate the merge. Applying the same
/// result twice yields the same answer set as applying it once.
pub fn apply_autofill(responses: &mut ScaleResponses, result: &AutofillResult) {
    for (question_id, value) in &result.responses {
        responses.insert(question_id.clone(), value.clone());
    }
}
