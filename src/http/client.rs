//! reqwest-based implementation of [`AnalysisTransport`].
//!
//! Each submission is a multipart POST of the dataset bytes under form field
//! `file` (the field name the analysis service expects), plus a `model` text
//! field for operations that carry one. Error responses are JSON objects of
//! the form `{"error": "..."}`; their message is passed through verbatim.
//!
//! No timeout is configured here: a request that never resolves leaves its
//! operation pending, which the UI shows as a busy indicator.

use async_trait::async_trait;
use reqwest::multipart;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::models::Dataset;
use crate::transport::{AnalysisTransport, TransportError};

/// HTTP client for the analysis service.
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url_trimmed().to_string(),
        }
    }
}

#[async_trait]
impl AnalysisTransport for HttpAnalysisClient {
    async fn submit(
        &self,
        endpoint_id: &str,
        dataset: &Dataset,
        model_param: Option<&str>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}/{}", self.base_url, endpoint_id);

        let file = multipart::Part::bytes(dataset.raw().to_vec())
            .file_name(dataset.name().to_string());
        let mut form = multipart::Form::new().part("file", file);
        if let Some(model) = model_param {
            form = form.text("model", model.to_string());
        }

        debug!(
            endpoint = endpoint_id,
            dataset = dataset.name(),
            checksum = dataset.checksum(),
            "submitting analysis request"
        );

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let status = response.status();

        let payload: Value = response.json().await.map_err(|e| {
            if status.is_success() {
                TransportError::Unreachable(e.to_string())
            } else {
                TransportError::Server(format!("server returned {status}"))
            }
        })?;

        if status.is_success() {
            Ok(payload)
        } else {
            let message = payload
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("server returned {status}"));
            Err(TransportError::Server(message))
        }
    }
}
