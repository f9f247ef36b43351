use crate::source::error::UsageSourceError;
use crate::usage::UsageRecord;

pub(crate) mod client;
pub use client::UsageClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UsageSource: Send + Sync {
    /// Base URL the source reads from, for display.
    fn base_url(&self) -> String;

    /// Read the full usage-record collection, in server order.
    async fn fetch_usage(&self) -> Result<Vec<UsageRecord>, UsageSourceError>;
}
