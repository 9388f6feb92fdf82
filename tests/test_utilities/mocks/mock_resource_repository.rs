use async_trait::async_trait;
use devcontrol_analytics::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ResourceRepository serving fixed data or a fixed failure
#[derive(Default, Clone)]
pub struct MockResourceRepository {
    resources: Vec<Resource>,
    stats: AggregateSecurityStats,
    stats_failure: Option<ApiErrorKind>,
    pub calls: Arc<AtomicUsize>,
}

impl MockResourceRepository {
    pub fn new(resources: Vec<Resource>, stats: AggregateSecurityStats) -> Self {
        Self {
            resources,
            stats,
            ..Self::default()
        }
    }

    pub fn failing_stats(mut self, kind: ApiErrorKind) -> Self {
        self.stats_failure = Some(kind);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceRepository for MockResourceRepository {
    async fn fetch_resources(&self) -> Result<Vec<Resource>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.resources.clone())
    }

    async fn fetch_security_stats(&self) -> Result<AggregateSecurityStats> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.stats_failure {
            Some(kind) => Err(AnalyticsError::Api {
                kind,
                endpoint: "/resources/stats".to_string(),
                details: "mock failure".to_string(),
            }
            .into()),
            None => Ok(self.stats),
        }
    }
}
