use super::retry::{retry_api_call, RetryPolicy};
use crate::analytics::domain::{AggregateSecurityStats, DependencyCycle, Resource, ServiceDependency};
use crate::ports::outbound::{DependencyRepository, ResourceRepository};
use crate::shared::error::{AnalyticsError, ApiErrorKind};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Error bodies longer than this are cut before being shown to the user
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Connection settings for the DevControl backend
#[derive(Debug, Clone)]
pub struct ApiClientSettings {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

/// Responses may arrive bare or wrapped as `{ "data": ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// DevControlApiClient adapter for the backend REST API
///
/// This adapter implements the ResourceRepository and DependencyRepository
/// ports. Reads go through the shared retry helper; `POST /dependencies`
/// is attempted exactly once because it is not idempotent.
pub struct DevControlApiClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    retry: RetryPolicy,
}

impl DevControlApiClient {
    /// Creates a new client from connection settings
    pub fn new(settings: ApiClientSettings) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("devcontrol-analytics/{}", version);
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_token: settings.api_token.filter(|t| !t.trim().is_empty()),
            retry: settings.retry,
        })
    }

    /// Absolute URL for an API path such as `/dependencies/cycles`
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let label = format!("GET {}", path);
        retry_api_call(&self.retry, &label, || {
            self.send_json::<T, ()>(Method::GET, path, None)
        })
        .await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("X-Request-Id", Uuid::new_v4().to_string());
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::transport_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let details = format!("HTTP {}: {}", status, truncate(body.trim()));
            // Bodies are free text, so only the status decides the kind
            let kind = ApiErrorKind::from_status(status.as_u16()).unwrap_or(ApiErrorKind::Unknown);
            return Err(AnalyticsError::Api {
                kind,
                endpoint: path.to_string(),
                details,
            }
            .into());
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| AnalyticsError::Api {
            kind: ApiErrorKind::Unknown,
            endpoint: path.to_string(),
            details: format!("Unexpected response body: {}", e),
        })?;
        Ok(envelope.into_inner())
    }

    fn transport_error(path: &str, error: reqwest::Error) -> anyhow::Error {
        let timed_out = error.is_timeout();
        let connect_failed = error.is_connect();
        // The URL is dropped so host and port digits cannot skew classification
        let details = format!("{:#}", anyhow::Error::from(error.without_url()));

        let kind = if timed_out {
            ApiErrorKind::Timeout
        } else if connect_failed {
            ApiErrorKind::Network
        } else {
            match ApiErrorKind::classify(&details) {
                ApiErrorKind::Unknown => ApiErrorKind::Network,
                classified => classified,
            }
        };

        AnalyticsError::Api {
            kind,
            endpoint: path.to_string(),
            details,
        }
        .into()
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}…", cut)
    }
}

#[async_trait]
impl ResourceRepository for DevControlApiClient {
    async fn fetch_resources(&self) -> Result<Vec<Resource>> {
        self.get_json("/resources").await
    }

    async fn fetch_security_stats(&self) -> Result<AggregateSecurityStats> {
        self.get_json("/resources/stats").await
    }
}

#[async_trait]
impl DependencyRepository for DevControlApiClient {
    async fn fetch_dependencies(&self) -> Result<Vec<ServiceDependency>> {
        self.get_json("/dependencies").await
    }

    async fn detect_circular_dependencies(&self) -> Result<Vec<DependencyCycle>> {
        self.get_json("/dependencies/cycles").await
    }

    async fn create_dependency(&self, dependency: &ServiceDependency) -> Result<ServiceDependency> {
        self.send_json(Method::POST, "/dependencies", Some(dependency))
            .await
    }
}
