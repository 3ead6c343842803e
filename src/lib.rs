//! # ExoLab Core
//!
//! Orchestration and result-shaping layer for the ExoLab exoplanet analysis
//! application. A user uploads a CSV dataset, triggers one of several
//! server-side analyses (class-distribution summary, row-wise prediction,
//! derived-feature visualization, light-curve/frequency analysis), and views
//! each result as a distinct chart. This crate owns the state machine between
//! the upload widget, the remote analysis service, and the chart layer:
//!
//! - **Dataset holding**: at most one dataset at a time; selecting a new file
//!   is a total replacement that invalidates every prior result.
//! - **Request orchestration**: independent busy/error/success tracking per
//!   operation, a one-in-flight guard per operation, and generation-counter
//!   discarding of completions that outlive the dataset they were issued for.
//! - **Result normalization**: heterogeneous JSON payloads validated and
//!   reshaped into the exact record sequences each chart type consumes.
//! - **View selection**: the most recently completed successful operation is
//!   displayed, unless the user pins a different completed result.
//!
//! Chart rendering, the file-drop widget, and the remote model service itself
//! are external collaborators and live outside this crate.
//!
//! ## Architecture
//!
//! - [`api`]: normalized result DTOs consumed verbatim by the chart layer
//! - [`models`]: dataset, operation, and per-operation state types
//! - [`services`]: CSV preview parsing, the operation registry, response
//!   normalization, and the [`AnalysisSession`] orchestrator
//! - [`transport`]: the async seam to the remote analysis service
//! - [`http`]: reqwest-based transport implementation (feature `http-client`)

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;

#[cfg(feature = "http-client")]
pub mod http;

pub use config::ClientConfig;
pub use error::{OperationFailure, TriggerError};
pub use models::{Dataset, Generation, Operation, OperationState};
pub use services::session::AnalysisSession;
pub use transport::{AnalysisTransport, TransportError};

#[cfg(feature = "http-client")]
pub use http::HttpAnalysisClient;
