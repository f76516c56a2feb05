//! Extraction prompt assembly.
//!
//! Builds the system prompt and the structured user message sent to the
//! inference backend: every question with its answer domain, the
//! patient summary, and the clinical narrative in an XML-style block.

use acuity_core::models::patient::PatientContext;
use acuity_core::models::scale::{QuestionKind, ScaleDefinition};

pub const EXTRACTION_SYSTEM_PROMPT: &str = "\
You extract clinical scale answers from a clinician's free-text note. \
Answer only from information stated in the note; never guess. \
Return a single JSON object with keys: \"responses\" (question id to \
answer value), \"annotations\" (question id to {\"confidence\": \
\"high\"|\"medium\"|\"low\", \"reasoning\": string}), \"missing_info\" \
(list of strings), and \"suggested_prompts\" (clarifying questions for \
the clinician). Omit questions the note does not address.";

/// Build the user message for an extraction request.
pub fn build_extraction_prompt(
    scale: &ScaleDefinition,
    clinical_text: &str,
    patient: &PatientContext,
) -> String {
    let mut prompt = format!("## {} ({})\n\n", scale.name, scale.abbreviation);

    for question in &scale.questions {
        prompt.push_str(&format!("- `{}`: {}", question.id, question.text));
        match &question.kind {
            QuestionKind::Select { options } | QuestionKind::Radio { options } => {
                let choices: Vec<String> = options
                    .iter()
                    .map(|o| format!("\"{}\" = {}", o.value, o.label))
                    .collect();
                prompt.push_str(&format!(" [one of: {}]", choices.join(", ")));
            }
            QuestionKind::Number { min, max, .. } => {
                prompt.push_str(&format!(" [number between {min} and {max}]"));
            }
            QuestionKind::Boolean { .. } => {
                prompt.push_str(" [true or false]");
            }
        }
        prompt.push('\n');
    }

    if let Some(summary) = &patient.summary {
        prompt.push_str("\n<patient_summary>\n");
        prompt.push_str(summary);
        if !summary.ends_with('\n') {
            prompt.push('\n');
        }
        prompt.push_str("</patient_summary>\n");
    }

    prompt.push_str("\n<clinical_note>\n");
    prompt.push_str(clinical_text);
    if !clinical_text.ends_with('\n') {
        prompt.push('\n');
    }
    prompt.push_str("</clinical_note>\n");

    prompt
}
