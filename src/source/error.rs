//! Error handling for the usage source

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsageSourceError {
    /// Failed to decode the `{"usage": [...]}` document
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl UsageSourceError {
    pub async fn from_response(response: reqwest::Response) -> UsageSourceError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        UsageSourceError::Http { status, message }
    }
}
