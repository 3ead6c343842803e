//! Response normalization.
//!
//! Pure mapping from a raw JSON payload to the [`NormalizedResult`] shape an
//! operation's chart needs. Validation fails closed: a missing or mistyped
//! field rejects the whole payload rather than letting a partial record reach
//! the chart layer. No resampling, smoothing, or sorting is applied anywhere;
//! sequences pass through in server-supplied order.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::{
    CategoryCount, CurvePoint, HistogramBucket, LightCurveBundle, NormalizedResult,
    PredictionSummary, ScatterPoint, SpectrumPoint, VisualizationBundle,
};
use crate::services::registry::ResultShape;

/// Why a payload failed shape validation. Collapsed to
/// `OperationFailure::MalformedResponse` at the operation boundary; the
/// detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("expected a JSON object")]
    NotAnObject,

    #[error("field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("payload does not match the expected shape: {0}")]
    Shape(String),
}

impl NormalizeError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        NormalizeError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Normalize a raw response payload into the given result shape.
pub fn normalize(shape: ResultShape, payload: Value) -> Result<NormalizedResult, NormalizeError> {
    match shape {
        ResultShape::CategoryDistribution => {
            normalize_categories(payload).map(NormalizedResult::CategoryDistribution)
        }
        ResultShape::PredictionSummary => {
            normalize_prediction(payload).map(NormalizedResult::Prediction)
        }
        ResultShape::VisualizationBundle => {
            normalize_visualization(payload).map(NormalizedResult::Visualization)
        }
        ResultShape::LightCurveBundle => {
            normalize_light_curve(payload).map(NormalizedResult::LightCurve)
        }
    }
}

// =============================================================================
// Category distribution
// =============================================================================

/// Input is a flat mapping from category label to numeric value. The
/// mapping's own iteration order becomes the sequence order (serde_json is
/// built with `preserve_order`, so this is the payload's key order).
fn normalize_categories(payload: Value) -> Result<Vec<CategoryCount>, NormalizeError> {
    let map = payload.as_object().ok_or(NormalizeError::NotAnObject)?;
    map.iter()
        .map(|(label, value)| {
            let value = value
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| NormalizeError::invalid("value", format!("`{label}` is not a finite number")))?;
            Ok(CategoryCount {
                label: label.clone(),
                value,
            })
        })
        .collect()
}

// =============================================================================
// Prediction summary
// =============================================================================

#[derive(Deserialize)]
struct PredictionWire {
    model_used: String,
    exoplanet_detected_count: u64,
    no_exoplanet_detected_count: u64,
    total_rows_predicted: u64,
    #[serde(default)]
    accuracy: Option<f64>,
}

fn normalize_prediction(payload: Value) -> Result<PredictionSummary, NormalizeError> {
    let wire: PredictionWire =
        serde_json::from_value(payload).map_err(|e| NormalizeError::Shape(e.to_string()))?;

    if let Some(accuracy) = wire.accuracy {
        if !accuracy.is_finite() || !(0.0..=1.0).contains(&accuracy) {
            return Err(NormalizeError::invalid(
                "accuracy",
                format!("{accuracy} is outside [0, 1]"),
            ));
        }
    }

    match wire
        .exoplanet_detected_count
        .checked_add(wire.no_exoplanet_detected_count)
    {
        Some(total) if total <= wire.total_rows_predicted => {}
        _ => {
            return Err(NormalizeError::invalid(
                "total_rows_predicted",
                "detected + not-detected exceeds total rows",
            ))
        }
    }

    Ok(PredictionSummary {
        model_used: wire.model_used,
        detected_count: wire.exoplanet_detected_count,
        not_detected_count: wire.no_exoplanet_detected_count,
        total_rows: wire.total_rows_predicted,
        accuracy: wire.accuracy,
    })
}

// =============================================================================
// Visualization bundle
// =============================================================================

#[derive(Deserialize)]
struct VisualizationWire {
    radius_histogram: Vec<BucketWire>,
    star_temp_histogram: Vec<BucketWire>,
    period_vs_radius: Vec<ScatterWire>,
}

#[derive(Deserialize)]
struct BucketWire {
    label: String,
    count: u64,
}

#[derive(Deserialize)]
struct ScatterWire {
    period: f64,
    radius: f64,
}

fn normalize_visualization(payload: Value) -> Result<VisualizationBundle, NormalizeError> {
    let wire: VisualizationWire =
        serde_json::from_value(payload).map_err(|e| NormalizeError::Shape(e.to_string()))?;

    let scatter = wire
        .period_vs_radius
        .into_iter()
        .map(|p| {
            if !p.period.is_finite() || !p.radius.is_finite() {
                return Err(NormalizeError::invalid(
                    "period_vs_radius",
                    "entries must carry finite period and radius",
                ));
            }
            Ok(ScatterPoint {
                period: p.period,
                radius: p.radius,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VisualizationBundle {
        radius_histogram: buckets(wire.radius_histogram),
        star_temp_histogram: buckets(wire.star_temp_histogram),
        period_vs_radius: scatter,
    })
}

fn buckets(wire: Vec<BucketWire>) -> Vec<HistogramBucket> {
    wire.into_iter()
        .map(|b| HistogramBucket {
            bucket_label: b.label,
            count: b.count,
        })
        .collect()
}

// =============================================================================
// Light-curve bundle
// =============================================================================

#[derive(Deserialize)]
struct LightCurveWire {
    series: Vec<CurvePoint>,
    spectrum: Vec<SpectrumPoint>,
}

fn normalize_light_curve(payload: Value) -> Result<LightCurveBundle, NormalizeError> {
    let wire: LightCurveWire =
        serde_json::from_value(payload).map_err(|e| NormalizeError::Shape(e.to_string()))?;

    for point in &wire.series {
        if !point.time.is_finite() || !point.flux.is_finite() {
            return Err(NormalizeError::invalid(
                "series",
                "entries must carry finite time and flux",
            ));
        }
    }
    for bin in &wire.spectrum {
        if !bin.frequency.is_finite() {
            return Err(NormalizeError::invalid(
                "spectrum",
                "entries must carry a finite frequency",
            ));
        }
        if !bin.amplitude.is_finite() || bin.amplitude < 0.0 {
            return Err(NormalizeError::invalid(
                "spectrum",
                "amplitude must be finite and non-negative",
            ));
        }
    }

    Ok(LightCurveBundle {
        series: wire.series,
        spectrum: wire.spectrum,
    })
}
