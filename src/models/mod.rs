pub mod dataset;
pub mod operation;

pub use dataset::*;
pub use operation::*;
