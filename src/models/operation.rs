//! Operations and their per-dataset lifecycle state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::NormalizedResult;
use crate::error::OperationFailure;

/// One user-triggerable remote analysis kind.
///
/// The set is closed and known at build time; a deployment that offers fewer
/// tabs would trim it with a cargo feature, not at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Class-distribution summary of the uploaded catalog.
    Analysis,
    /// Row-wise exoplanet prediction with a selected model.
    Prediction,
    /// Derived-feature visualization (histograms + scatter).
    Visualization,
    /// Single-series light-curve and frequency analysis.
    LightCurve,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Analysis,
        Operation::Prediction,
        Operation::Visualization,
        Operation::LightCurve,
    ];

    /// Stable kebab-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Analysis => "analysis",
            Operation::Prediction => "prediction",
            Operation::Visualization => "visualization",
            Operation::LightCurve => "light-curve",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of one operation within the current dataset's lifetime.
///
/// Exactly one state exists per operation; loading a new dataset resets every
/// operation to `Idle` in one step.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OperationState {
    /// Never triggered for the current dataset.
    #[default]
    Idle,
    /// A request is in flight. A second trigger while pending is refused, and
    /// a request that never resolves stays here (perpetual busy indicator,
    /// not an error).
    Pending,
    /// The response was received and normalized.
    Succeeded(NormalizedResult),
    /// The request ended in a transport, server, or shape failure.
    Failed(OperationFailure),
}

impl OperationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, OperationState::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, OperationState::Succeeded(_))
    }

    /// The normalized result, if this state carries one.
    pub fn result(&self) -> Option<&NormalizedResult> {
        match self {
            OperationState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The stored failure, if this state carries one.
    pub fn failure(&self) -> Option<&OperationFailure> {
        match self {
            OperationState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// State table entry: the lifecycle state plus timestamps for busy/duration
/// display.
#[derive(Debug, Clone, Default)]
pub struct OperationSlot {
    pub state: OperationState,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl OperationSlot {
    /// A slot entering `Pending` now.
    pub fn begin() -> Self {
        Self {
            state: OperationState::Pending,
            started_at: Some(chrono::Utc::now()),
            finished_at: None,
        }
    }

    /// Move to a terminal state, stamping the finish time.
    pub fn finish(&mut self, state: OperationState) {
        self.state = state;
        self.finished_at = Some(chrono::Utc::now());
    }
}
