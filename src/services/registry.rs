//! Operation registry: the process-wide constant table describing each
//! remote operation.

use crate::models::Operation;

/// Tag for the result shape an operation's response must normalize into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultShape {
    CategoryDistribution,
    PredictionSummary,
    VisualizationBundle,
    LightCurveBundle,
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Path segment of the service endpoint, without a leading slash.
    pub endpoint_id: &'static str,
    /// Whether a model selection must accompany the request.
    pub requires_model_param: bool,
    /// The shape the response is normalized into.
    pub shape: ResultShape,
}

/// Describe an operation. Constant table; no mutation after initialization.
pub const fn describe(op: Operation) -> OperationDescriptor {
    match op {
        Operation::Analysis => OperationDescriptor {
            endpoint_id: "analyze",
            requires_model_param: false,
            shape: ResultShape::CategoryDistribution,
        },
        Operation::Prediction => OperationDescriptor {
            endpoint_id: "predict",
            requires_model_param: true,
            shape: ResultShape::PredictionSummary,
        },
        Operation::Visualization => OperationDescriptor {
            endpoint_id: "visualize",
            requires_model_param: false,
            shape: ResultShape::VisualizationBundle,
        },
        Operation::LightCurve => OperationDescriptor {
            endpoint_id: "lightcurve",
            requires_model_param: false,
            shape: ResultShape::LightCurveBundle,
        },
    }
}

/// Operations offered by this build.
pub fn available() -> &'static [Operation] {
    &Operation::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_is_described() {
        for &op in available() {
            let descriptor = describe(op);
            assert!(!descriptor.endpoint_id.is_empty());
        }
    }

    #[test]
    fn test_endpoint_ids_are_unique() {
        let mut ids: Vec<&str> = available()
            .iter()
            .map(|&op| describe(op).endpoint_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), available().len());
    }

    #[test]
    fn test_only_prediction_needs_a_model() {
        for &op in available() {
            assert_eq!(
                describe(op).requires_model_param,
                op == Operation::Prediction,
                "unexpected model requirement for {op}"
            );
        }
    }
}
