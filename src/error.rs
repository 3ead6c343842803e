//! Error taxonomy for the orchestration layer.
//!
//! Trigger-time preconditions and completion-time failures are deliberately
//! separate types: precondition violations are returned to the caller before
//! any request is issued, while completion failures are stored in the
//! operation's state table and surfaced through it. Nothing here escalates
//! past the operation boundary.

use thiserror::Error;

use crate::models::Operation;

/// Precondition failure raised by `AnalysisSession::trigger` before any
/// outbound request is issued. All variants are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// No dataset is loaded; surfaced to the user as a prompt to upload one.
    #[error("no dataset selected; upload a CSV file before running an analysis")]
    NoDatasetSelected,

    /// The operation already has a request in flight. The existing request
    /// keeps running and no second one is issued; callers may treat this as
    /// a silent no-op.
    #[error("{0} is already running")]
    OperationAlreadyPending(Operation),

    /// The operation needs an auxiliary parameter (a model selection) that
    /// was not supplied.
    #[error("{0} requires a model selection")]
    MissingRequiredParam(Operation),
}

/// Terminal failure of a triggered operation, stored as
/// `OperationState::Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationFailure {
    /// Network-level failure; the service never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success response carrying a structured message, passed through
    /// verbatim.
    #[error("{0}")]
    Server(String),

    /// A response arrived but did not match the expected result shape. The
    /// original payload is discarded.
    #[error("the server response could not be interpreted")]
    MalformedResponse,
}
