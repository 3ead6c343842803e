//! Async seam to the remote analysis service.
//!
//! The orchestrator issues exactly one `submit` call per trigger and never
//! looks past this trait; tests substitute their own implementation, and the
//! `http` module provides the reqwest-based one.

use async_trait::async_trait;

use crate::error::OperationFailure;
use crate::models::Dataset;

/// Failure of a single outbound request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The service could not be reached or produced no usable response.
    #[error("analysis service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a structured error message.
    #[error("{0}")]
    Server(String),
}

impl From<TransportError> for OperationFailure {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Unreachable(msg) => OperationFailure::Transport(msg),
            TransportError::Server(msg) => OperationFailure::Server(msg),
        }
    }
}

/// Client for the remote analysis service.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; several operations may have
/// requests in flight concurrently.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    /// Submit the dataset to one analysis endpoint and return the raw JSON
    /// payload of a successful response.
    ///
    /// # Arguments
    /// * `endpoint_id` - Endpoint identifier from the operation registry
    /// * `dataset` - The dataset captured at trigger time
    /// * `model_param` - Model selection, for operations that require one
    async fn submit(
        &self,
        endpoint_id: &str,
        dataset: &Dataset,
        model_param: Option<&str>,
    ) -> Result<serde_json::Value, TransportError>;
}
