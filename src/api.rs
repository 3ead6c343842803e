//! Normalized result types handed to the chart layer.
//!
//! Each variant of [`NormalizedResult`] matches one chart type. The chart
//! layer consumes these records verbatim; no further transformation happens
//! downstream, so field names serialize in the camelCase form the frontend
//! components expect.

use serde::{Deserialize, Serialize};

// =============================================================================
// Record types
// =============================================================================

/// One labelled value in a class-distribution chart (percentage or count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub label: String,
    pub value: f64,
}

/// Summary card data for a row-wise prediction run.
///
/// Invariant (enforced by normalization): `detected_count + not_detected_count
/// <= total_rows`, and `accuracy` is within `[0, 1]` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub model_used: String,
    pub detected_count: u64,
    pub not_detected_count: u64,
    pub total_rows: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

/// One bucket of a histogram chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    pub bucket_label: String,
    pub count: u64,
}

/// One point of the period-vs-radius scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub period: f64,
    pub radius: f64,
}

/// Derived-feature visualization data: two histograms plus a scatter series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationBundle {
    pub radius_histogram: Vec<HistogramBucket>,
    pub star_temp_histogram: Vec<HistogramBucket>,
    pub period_vs_radius: Vec<ScatterPoint>,
}

/// One sample of a light-curve time series.
///
/// Also the record type of the locally parsed CSV preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub time: f64,
    pub flux: f64,
}

/// One bin of a frequency spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumPoint {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Light-curve analysis data: the (possibly irregularly spaced) time series
/// and its frequency spectrum, both in server-supplied order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightCurveBundle {
    pub series: Vec<CurvePoint>,
    pub spectrum: Vec<SpectrumPoint>,
}

// =============================================================================
// Result envelope
// =============================================================================

/// A validated, chart-ready analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NormalizedResult {
    /// Sequence order is the server payload's mapping order; no sorting is
    /// imposed here.
    CategoryDistribution(Vec<CategoryCount>),
    Prediction(PredictionSummary),
    Visualization(VisualizationBundle),
    LightCurve(LightCurveBundle),
}
