use crate::analytics::domain::{AggregateSecurityStats, Resource};
use crate::shared::Result;
use async_trait::async_trait;

/// ResourceRepository port for the AWS resource inventory
///
/// This port abstracts the data source (the DevControl backend, or a local
/// snapshot in demo mode) that serves resources and their aggregate counters.
///
/// # Async Support
/// Implementations must be `Send + Sync` so both calls can run concurrently.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Fetches the full resource inventory (`GET /resources`)
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed
    async fn fetch_resources(&self) -> Result<Vec<Resource>>;

    /// Fetches account-wide security counters (`GET /resources/stats`)
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed
    async fn fetch_security_stats(&self) -> Result<AggregateSecurityStats>;
}
