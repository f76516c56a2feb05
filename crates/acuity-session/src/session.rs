//! The section orchestrator: wires catalog, scoring, autofill, and
//! persistence together for the active patient/visit context.

use std::collections::BTreeMap;
use std::sync::Arc;

use acuity_autofill::error::AutofillError;
use acuity_autofill::merge::apply_autofill;
use acuity_autofill::service::{AutofillRequest, AutofillService};
use acuity_core::models::patient::PatientContext;
use acuity_core::models::response::ResponseValue;
use acuity_core::models::scale::{ScaleCategory, ScaleDefinition};
use acuity_core::models::score::ScoreCalculation;
use acuity_scales::scoring::calculate_score;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::machine::{save_event, StateEvent};
use crate::note;
use crate::state::ScaleState;
use crate::store::{ResultStore, SaveRequest};
use crate::trend::{trend, Trend};

/// Cap on history records fetched per patient context.
const HISTORY_LIMIT: usize = 100;

type CompleteCallback = Arc<dyn Fn(&str, &ScoreCalculation) + Send + Sync>;

/// Per-context scale orchestration. Cheap to clone; clones share state.
///
/// All scoring is synchronous on the turn of the triggering edit.
/// Saves and autofill requests are asynchronous, guarded by per-scale
/// in-flight flags, and independent across scales. Failed saves are
/// logged and recovered only by a subsequent edit that re-requests the
/// save — a caller making no further edits will observe a permanently
/// complete-but-unsaved scale.
#[derive(Clone)]
pub struct ScaleSession {
    inner: Arc<Mutex<SessionInner>>,
    store: Arc<dyn ResultStore>,
    autofill: Arc<dyn AutofillService>,
    on_scale_complete: Option<CompleteCallback>,
}

#[derive(Default)]
struct SessionInner {
    context: Option<PatientContext>,
    /// Bumped on every context change; async completions compare it
    /// before committing a late-arriving result.
    generation: u64,
    /// Relevant scale ids in display order.
    order: Vec<String>,
    scales: BTreeMap<String, ScaleState>,
}

impl ScaleSession {
    pub fn new(store: Arc<dyn ResultStore>, autofill: Arc<dyn AutofillService>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner::default())),
            store,
            autofill,
            on_scale_complete: None,
        }
    }

    /// Register a callback fired once per successful save, for
    /// downstream note-generation features.
    pub fn on_scale_complete(
        mut self,
        callback: impl Fn(&str, &ScoreCalculation) + Send + Sync + 'static,
    ) -> Self {
        self.on_scale_complete = Some(Arc::new(callback));
        self
    }

    /// Switch to a new patient/visit context. Discards all in-memory
    /// scale state, resolves the relevant scales for the context's
    /// conditions (plus the full examination catalog), and seeds each
    /// scale's trend baseline from persisted history. A history fetch
    /// failure is logged and leaves baselines empty; it never fails the
    /// context switch.
    pub async fn set_patient_context(&self, context: PatientContext) {
        let (generation, patient_id) = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.scales.clear();
            inner.order.clear();

            for scale in resolve_scales(&context.conditions) {
                inner.order.push(scale.id.clone());
                inner
                    .scales
                    .insert(scale.id.clone(), ScaleState::new(scale));
            }

            let patient_id = context.patient_id.clone();
            inner.context = Some(context);
            (inner.generation, patient_id)
        };

        info!(patient_id, "patient context set");

        let history = match self
            .store
            .fetch_history(&patient_id, Some(HISTORY_LIMIT))
            .await
        {
            Ok(history) => history,
            Err(e) => {
                warn!(patient_id, error = %e, "history fetch failed; trends unavailable");
                return;
            }
        };

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(patient_id, "discarding history for a stale context");
            return;
        }
        // Newest first: the first occurrence per scale id wins.
        for result in history {
            if let Some(state) = inner.scales.get_mut(&result.scale_id)
                && state.previous_result.is_none()
            {
                state.previous_result = Some(result);
            }
        }
    }

    /// Relevant scale ids in display order.
    pub async fn scale_ids(&self) -> Vec<String> {
        self.inner.lock().await.order.clone()
    }

    /// Snapshot of one scale's state for rendering.
    pub async fn scale_state(&self, scale_id: &str) -> Option<ScaleState> {
        self.inner.lock().await.scales.get(scale_id).cloned()
    }

    /// Record a manual answer edit (or clear it with `None`).
    /// Last-write-wins per question id. Recomputes the score on the
    /// same turn; an edit that leaves the scale complete and unsaved
    /// requests a save (duplicates collapse in the save coordinator).
    pub async fn record_response(
        &self,
        scale_id: &str,
        question_id: &str,
        value: Option<ResponseValue>,
    ) -> Result<(), SessionError> {
        let scale = lookup_scale(scale_id)?;
        let event = {
            let mut inner = self.inner.lock().await;
            let state = ensure_state(&mut inner, scale);

            match value {
                Some(value) => {
                    state.responses.insert(question_id.to_string(), value);
                }
                None => {
                    state.responses.remove(question_id);
                }
            }

            let before = state.completion_state();
            // Any edit invalidates a previous save; still-complete
            // scales move back to CompleteUnsaved and save again.
            state.is_saved = false;
            state.calculation = calculate_score(scale, &state.responses);
            let after = state.completion_state();
            debug!(scale_id, question_id, ?before, ?after, "response recorded");
            save_event(after)
        };

        if event == StateEvent::SaveNeeded {
            tokio::spawn(self.clone().run_save(scale_id.to_string()));
        }
        Ok(())
    }

    /// Request AI-extracted answers for a scale and merge them into the
    /// live answer set. Rejected client-side when `clinical_text` is
    /// empty; a second request while one is in flight is a no-op.
    /// Inference failures are surfaced on the scale state as an inline
    /// message, not returned.
    pub async fn autofill_scale(
        &self,
        scale_id: &str,
        clinical_text: &str,
    ) -> Result<(), SessionError> {
        if clinical_text.trim().is_empty() {
            return Err(AutofillError::EmptyClinicalText.into());
        }
        let scale = lookup_scale(scale_id)?;

        let (generation, patient) = {
            let mut inner = self.inner.lock().await;
            let generation = inner.generation;
            let Some(context) = inner.context.clone() else {
                return Err(SessionError::NoPatientContext);
            };
            let state = ensure_state(&mut inner, scale);
            if state.is_autofilling {
                debug!(scale_id, "autofill already in flight");
                return Ok(());
            }
            state.is_autofilling = true;
            state.autofill_error = None;
            (generation, context)
        };

        info!(scale_id, "requesting autofill");
        let outcome = self
            .autofill
            .extract(AutofillRequest {
                scale_id: scale_id.to_string(),
                clinical_text: clinical_text.to_string(),
                patient,
            })
            .await;

        let event = {
            let mut inner = self.inner.lock().await;
            if inner.generation != generation {
                warn!(scale_id, "discarding autofill result for a stale context");
                return Ok(());
            }
            let Some(state) = inner.scales.get_mut(scale_id) else {
                return Ok(());
            };
            state.is_autofilling = false;

            match outcome {
                Ok(result) => {
                    apply_autofill(&mut state.responses, &result);
                    state.is_saved = false;
                    state.calculation = calculate_score(scale, &state.responses);
                    let after = state.completion_state();
                    info!(
                        scale_id,
                        merged = result.responses.len(),
                        missing = result.missing_info.len(),
                        "autofill applied"
                    );
                    state.last_autofill = Some(result);
                    save_event(after)
                }
                Err(e) => {
                    warn!(scale_id, error = %e, "autofill failed");
                    state.autofill_error = Some(e.to_string());
                    StateEvent::None
                }
            }
        };

        if event == StateEvent::SaveNeeded {
            tokio::spawn(self.clone().run_save(scale_id.to_string()));
        }
        Ok(())
    }

    /// Expand or collapse a scale, creating its state lazily on first
    /// expansion.
    pub async fn set_expanded(&self, scale_id: &str, expanded: bool) -> Result<(), SessionError> {
        let scale = lookup_scale(scale_id)?;
        let mut inner = self.inner.lock().await;
        ensure_state(&mut inner, scale).is_expanded = expanded;
        Ok(())
    }

    /// Trend annotation for a scale against its seeded baseline.
    pub async fn trend_for(&self, scale_id: &str) -> Option<Trend> {
        let scale = lookup_scale(scale_id).ok()?;
        let inner = self.inner.lock().await;
        let state = inner.scales.get(scale_id)?;
        trend(scale, &state.calculation, state.previous_result.as_ref())
    }

    /// Formatted note line for a completed scale, or `None` while
    /// incomplete.
    pub async fn note_line(&self, scale_id: &str) -> Option<String> {
        let scale = lookup_scale(scale_id).ok()?;
        let inner = self.inner.lock().await;
        let state = inner.scales.get(scale_id)?;
        if !state.calculation.is_complete {
            return None;
        }
        Some(note::note_line(
            scale,
            &state.calculation,
            jiff::Zoned::now().date(),
        ))
    }

    /// Issue the save for a scale that is complete and unsaved. The
    /// `is_saving` flag makes a second trigger before resolution a
    /// no-op, so duplicate triggers collapse into one request. A
    /// success whose answers changed mid-flight is discarded and the
    /// loop saves again from a fresh snapshot, holding the in-flight
    /// marker the whole time. On failure the scale stays
    /// complete-but-unsaved; the next edit re-requests. No retry timer
    /// exists.
    async fn run_save(self, scale_id: String) {
        let mut retrying = false;
        loop {
            let (generation, request) = {
                let mut inner = self.inner.lock().await;
                let generation = inner.generation;
                let Some(context) = inner.context.clone() else {
                    debug!(scale_id, "skipping save without patient context");
                    return;
                };
                let Some(state) = inner.scales.get_mut(&scale_id) else {
                    return;
                };
                if state.is_saving && !retrying {
                    return;
                }
                if !state.calculation.is_complete || state.is_saved {
                    state.is_saving = false;
                    return;
                }
                state.is_saving = true;
                let request = SaveRequest {
                    patient_id: context.patient_id,
                    visit_id: context.visit_id,
                    scale_id: scale_id.clone(),
                    responses: state.responses.clone(),
                    raw_score: state.calculation.raw_score,
                    interpretation: state.calculation.interpretation.clone(),
                    severity: state.calculation.severity,
                    grade: state.calculation.grade.clone(),
                    triggered_alerts: state.calculation.triggered_alerts.clone(),
                };
                (generation, request)
            };

            let snapshot = request.responses.clone();
            info!(scale_id, raw_score = request.raw_score, "saving scale result");
            let outcome = self.store.save_result(request).await;

            let mut inner = self.inner.lock().await;
            if inner.generation != generation {
                warn!(scale_id, "discarding save result for a stale context");
                return;
            }
            let Some(state) = inner.scales.get_mut(&scale_id) else {
                return;
            };

            match outcome {
                Ok(record) => {
                    if state.responses != snapshot {
                        // The persisted record no longer reflects the
                        // live answers. Keep the in-flight marker so no
                        // duplicate trigger slips in before the retry.
                        warn!(scale_id, "answers changed during save; saving again");
                        retrying = true;
                        drop(inner);
                        continue;
                    }
                    state.is_saving = false;
                    state.is_saved = true;
                    // Baseline for subsequent visits only; previous_result
                    // keeps pointing at the prior visit for this one.
                    state.last_saved = Some(record);
                    info!(scale_id, "scale result saved");
                    let calculation = state.calculation.clone();
                    drop(inner);
                    if let Some(callback) = &self.on_scale_complete {
                        callback(&scale_id, &calculation);
                    }
                    return;
                }
                Err(e) => {
                    state.is_saving = false;
                    warn!(scale_id, error = %e, "scale result save failed");
                    return;
                }
            }
        }
    }
}

fn lookup_scale(scale_id: &str) -> Result<&'static ScaleDefinition, SessionError> {
    acuity_scales::get_scale(scale_id).ok_or_else(|| SessionError::UnknownScale(scale_id.to_string()))
}

fn ensure_state<'a>(
    inner: &'a mut SessionInner,
    scale: &'static ScaleDefinition,
) -> &'a mut ScaleState {
    if !inner.scales.contains_key(&scale.id) {
        inner.order.push(scale.id.clone());
    }
    inner
        .scales
        .entry(scale.id.clone())
        .or_insert_with(|| ScaleState::new(scale))
}

/// Scales relevant to the active conditions, in priority order,
/// followed by examination scales not already included. Valid with
/// zero conditions: only the examination catalog is offered.
fn resolve_scales(conditions: &[String]) -> Vec<&'static ScaleDefinition> {
    let mut scales = acuity_scales::scales_for_conditions(conditions);
    let mut exams = acuity_scales::scales_in_category(ScaleCategory::Examination);
    exams.sort_by(|a, b| a.id.cmp(&b.id));
    for exam in exams {
        if !scales.iter().any(|s| s.id == exam.id) {
            scales.push(exam);
        }
    }
    scales
}
