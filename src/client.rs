use anyhow::{Context, Result};
use reqwest::Client;
use thiserror::Error;

use crate::config::Config;
use crate::models::Order;

/// Errors a lookup can end in.
///
/// The `Display` text of each variant is exactly what the view shows in
/// its error banner.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The API answered with a non-success status.
    #[error("Order not found")]
    NotFound,
    /// The request could not be completed.
    #[error("{0}")]
    Transport(String),
    /// The response body was not a valid order record.
    #[error("{0}")]
    Decode(String),
}

/// Source of order records, object-safe so the view can be driven by a
/// scripted implementation in tests.
#[async_trait::async_trait]
pub trait OrderApi: Send + Sync {
    async fn fetch_order(&self, order_uid: &str) -> Result<Order, LookupError>;
}

pub struct OrderClient {
    config: Config,
    http_client: Client,
}

impl OrderClient {
    /// No request timeout is set: an unresponsive server keeps the
    /// current lookup pending, matching the behavior of the API's other
    /// consumers.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, http_client })
    }
}

#[async_trait::async_trait]
impl OrderApi for OrderClient {
    async fn fetch_order(&self, order_uid: &str) -> Result<Order, LookupError> {
        let url = format!("{}/api/order/{}", self.config.api_url, order_uid);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::NotFound);
        }

        let order: Order = response
            .json()
            .await
            .map_err(|err| LookupError::Decode(err.to_string()))?;

        Ok(order)
    }
}
