//! HTTP client for the external inference service

use std::time::Duration;

use async_trait::async_trait;

use crate::error::RemoteFailure;
use crate::traits::RemoteModel;
use crate::types::{PassengerRecord, RemotePrediction};

/// Inference endpoint of the deployed decision-tree model.
pub const DEFAULT_ENDPOINT: &str = "https://titanic-model-o1yt.onrender.com";

/// Default request timeout. The service has no SLA; ten seconds keeps a
/// dead endpoint from stalling the submission indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Real remote model client speaking JSON over HTTP.
pub struct RealRemoteModel {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl RealRemoteModel {
    /// Create a client for the given endpoint with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl Default for RealRemoteModel {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl RemoteModel for RealRemoteModel {
    async fn predict(&self, record: &PassengerRecord) -> Result<RemotePrediction, RemoteFailure> {
        let url = format!("{}/predict", self.endpoint);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(record)
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteFailure::ServerError(response.status().as_u16()));
        }

        response
            .json::<RemotePrediction>()
            .await
            .map_err(|e| RemoteFailure::InvalidResponse(e.to_string()))
    }
}
