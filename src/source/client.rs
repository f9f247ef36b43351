//! Usage Source Client
//!
//! Reads the usage-record collection from `GET <base-url>/usage`.

use crate::endpoint::BaseUrl;
use crate::source::UsageSource;
use crate::source::error::UsageSourceError;
use crate::usage::{UsageRecord, UsageResponse};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("usage-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct UsageClient {
    client: Client,
    base_url: BaseUrl,
}

impl UsageClient {
    pub fn new(base_url: BaseUrl, timeout: Duration) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(timeout)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
        }
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, UsageSourceError> {
        serde_json::from_slice(bytes).map_err(UsageSourceError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, UsageSourceError> {
        if !response.status().is_success() {
            return Err(UsageSourceError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, UsageSourceError> {
        let url = self.base_url.join(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl UsageSource for UsageClient {
    fn base_url(&self) -> String {
        self.base_url.to_string()
    }

    async fn fetch_usage(&self) -> Result<Vec<UsageRecord>, UsageSourceError> {
        let response: UsageResponse = self.get_request("usage").await?;
        Ok(response.usage)
    }
}
