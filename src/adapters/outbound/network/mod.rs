/// Network adapters for the DevControl backend API
mod api_client;
mod retry;

pub use api_client::{ApiClientSettings, DevControlApiClient};
pub use retry::{retry_api_call, Backoff, RetryPolicy};
