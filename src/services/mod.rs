//! Service layer: the operation registry, local preview parsing, response
//! normalization, and the analysis session orchestrator.

pub mod normalize;
pub mod preview;
pub mod registry;
pub mod session;



pub use normalize::normalize;
pub use preview::parse_preview;
pub use registry::{available, describe, OperationDescriptor, ResultShape};
pub use session::AnalysisSession;
