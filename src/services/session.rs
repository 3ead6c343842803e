//! The analysis session: dataset holding, request orchestration, and view
//! selection.
//!
//! One [`AnalysisSession`] backs one open document in the UI. The handle is
//! cheap to clone and safe to share: all mutable state sits behind a single
//! lock, and the lock is never held across an await. Each trigger runs as its
//! own future, so several operations can have requests in flight at once
//! while the UI keeps interacting with the same session.
//!
//! Two rules govern how completions land:
//!
//! - **Completion order wins.** Results are applied as responses arrive, not
//!   in trigger order; the most recently completed success becomes the
//!   displayed result. Deliberate simplification; trigger-order semantics
//!   could be argued for at the product level.
//! - **Stale completions are discarded.** Replacing the dataset advances a
//!   generation counter; a completion whose captured generation no longer
//!   matches is dropped without touching any state. Requests are never
//!   aborted, only their results discarded.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::api::{CurvePoint, NormalizedResult};
use crate::error::{OperationFailure, TriggerError};
use crate::models::{Dataset, Generation, Operation, OperationSlot, OperationState};
use crate::services::normalize::normalize;
use crate::services::preview::parse_preview;
use crate::services::registry;
use crate::transport::AnalysisTransport;

/// Orchestrates remote analyses over the currently loaded dataset.
#[derive(Clone)]
pub struct AnalysisSession {
    inner: Arc<RwLock<SessionInner>>,
    transport: Arc<dyn AnalysisTransport>,
}

#[derive(Default)]
struct SessionInner {
    dataset: Option<Dataset>,
    generation: Generation,
    preview: Vec<CurvePoint>,
    preview_warning: Option<String>,
    slots: HashMap<Operation, OperationSlot>,
    /// Auto-selected operation: the last one to complete successfully.
    active: Option<Operation>,
    /// Display-only user override, cleared by the next successful completion.
    pinned: Option<Operation>,
}

impl AnalysisSession {
    /// Create a session over the given transport.
    pub fn new(transport: Arc<dyn AnalysisTransport>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner::default())),
            transport,
        }
    }

    // =========================================================================
    // Dataset holding
    // =========================================================================

    /// Replace the current dataset unconditionally.
    ///
    /// Resets every operation to `Idle`, clears the displayed result and any
    /// pin, advances the generation so in-flight completions are discarded,
    /// and recomputes the local preview best-effort. Preview failure never
    /// blocks acceptance; it only leaves the preview empty with a non-fatal
    /// warning.
    pub fn set_dataset(&self, name: impl Into<String>, raw: Vec<u8>) {
        let dataset = Dataset::new(name, raw);
        let preview = parse_preview(&dataset.text());
        let preview_warning = if preview.is_empty() {
            Some(format!(
                "no preview could be parsed from {}; charts will appear after the first analysis",
                dataset.name()
            ))
        } else {
            None
        };

        info!(
            name = dataset.name(),
            checksum = dataset.checksum(),
            preview_rows = preview.len(),
            "dataset replaced"
        );

        let mut inner = self.inner.write();
        inner.generation = inner.generation.next();
        inner.dataset = Some(dataset);
        inner.preview = preview;
        inner.preview_warning = preview_warning;
        inner.slots.clear();
        inner.active = None;
        inner.pinned = None;
    }

    /// The current dataset, if one is loaded.
    pub fn current_dataset(&self) -> Option<Dataset> {
        self.inner.read().dataset.clone()
    }

    /// Locally parsed preview samples for the current dataset (empty when
    /// parsing found no usable rows).
    pub fn preview(&self) -> Vec<CurvePoint> {
        self.inner.read().preview.clone()
    }

    /// Non-fatal "preview unavailable" message, distinct from operation
    /// errors.
    pub fn preview_warning(&self) -> Option<String> {
        self.inner.read().preview_warning.clone()
    }

    // =========================================================================
    // Request orchestration
    // =========================================================================

    /// Trigger one remote operation against the current dataset.
    ///
    /// Issues exactly one outbound request and awaits its completion, then
    /// applies the outcome to the operation's state slot. Precondition
    /// failures return before any request is issued; completion failures are
    /// stored as `OperationState::Failed` and never propagate out of this
    /// call.
    pub async fn trigger(
        &self,
        op: Operation,
        model_param: Option<&str>,
    ) -> Result<(), TriggerError> {
        let descriptor = registry::describe(op);

        let (generation, dataset) = {
            let mut inner = self.inner.write();
            let dataset = inner
                .dataset
                .clone()
                .ok_or(TriggerError::NoDatasetSelected)?;
            if inner.slot(op).state.is_pending() {
                return Err(TriggerError::OperationAlreadyPending(op));
            }
            if descriptor.requires_model_param && model_param.is_none() {
                return Err(TriggerError::MissingRequiredParam(op));
            }
            inner.slots.insert(op, OperationSlot::begin());
            (inner.generation, dataset)
        };

        debug!(%op, endpoint = descriptor.endpoint_id, "request issued");
        let outcome = self
            .transport
            .submit(descriptor.endpoint_id, &dataset, model_param)
            .await;

        let mut inner = self.inner.write();
        if inner.generation != generation {
            debug!(%op, "discarding completion for a replaced dataset");
            return Ok(());
        }

        let state = match outcome {
            Ok(payload) => match normalize(descriptor.shape, payload) {
                Ok(result) => {
                    info!(%op, "operation succeeded");
                    inner.active = Some(op);
                    inner.pinned = None;
                    OperationState::Succeeded(result)
                }
                Err(err) => {
                    warn!(%op, error = %err, "response failed shape validation");
                    OperationState::Failed(OperationFailure::MalformedResponse)
                }
            },
            Err(err) => {
                warn!(%op, error = %err, "operation failed");
                OperationState::Failed(err.into())
            }
        };
        inner.slot_mut(op).finish(state);
        Ok(())
    }

    /// Current lifecycle state of one operation.
    pub fn state_of(&self, op: Operation) -> OperationState {
        self.inner.read().slot(op).state.clone()
    }

    /// The stored failure of one operation, if its last run failed.
    pub fn last_failure(&self, op: Operation) -> Option<OperationFailure> {
        self.state_of(op).failure().cloned()
    }

    // =========================================================================
    // View selection
    // =========================================================================

    /// The operation whose result is currently displayed: the user's pinned
    /// tab if any, otherwise the last operation to complete successfully.
    pub fn displayed_operation(&self) -> Option<Operation> {
        let inner = self.inner.read();
        inner.pinned.or(inner.active)
    }

    /// The displayed result, or `None` if nothing has succeeded yet (or the
    /// displayed operation's state raced against a reset).
    pub fn active_result(&self) -> Option<NormalizedResult> {
        let inner = self.inner.read();
        let displayed = inner.pinned.or(inner.active)?;
        inner.slot(displayed).state.result().cloned()
    }

    /// Manually view an operation's completed result without re-triggering
    /// it. Silently ignored unless that operation has succeeded; the pin
    /// lasts until the next successful completion re-asserts auto-selection.
    pub fn select_tab(&self, op: Operation) {
        let mut inner = self.inner.write();
        if inner.slot(op).state.is_succeeded() {
            inner.pinned = Some(op);
        } else {
            debug!(%op, "ignoring tab selection for an operation without a result");
        }
    }
}

impl SessionInner {
    fn slot(&self, op: Operation) -> &OperationSlot {
        static IDLE: OperationSlot = OperationSlot {
            state: OperationState::Idle,
            started_at: None,
            finished_at: None,
        };
        self.slots.get(&op).unwrap_or(&IDLE)
    }

    fn slot_mut(&mut self, op: Operation) -> &mut OperationSlot {
        self.slots.entry(op).or_default()
    }
}
