use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{Credentials, TrackError, TrackedOrder, TrackerConfig};

/// Client for the order-tracking endpoint. One call, no retries.
#[derive(Debug, Clone, Default)]
pub struct OrderTracker {
    config: TrackerConfig,
    client: reqwest::Client,
}

impl OrderTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// POSTs the credentials and parses whatever JSON comes back.
    ///
    /// A `success: false` body is still returned as `Ok`; use
    /// [`crate::OrderResponse::ensure_success`] to turn it into an error.
    #[instrument(skip_all, name = "fetch_orders", fields(email = %credentials.masked_email()))]
    pub async fn fetch(&self, credentials: &Credentials) -> Result<TrackedOrder, TrackError> {
        let mut request = self
            .client
            .post(&self.config.endpoint_url)
            .json(credentials);
        for (name, value) in self.config.request_headers() {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Order tracking request failed: {e}");
            TrackError::Network(e.to_string())
        })?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            bytes = response.content_length(),
            "Order tracking response received"
        );
        if !status.is_success() {
            return Err(TrackError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let raw = response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                TrackError::Decode(e.to_string())
            } else {
                TrackError::Network(e.to_string())
            }
        })?;
        TrackedOrder::from_json(raw)
    }
}
