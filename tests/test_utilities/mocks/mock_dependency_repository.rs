use async_trait::async_trait;
use devcontrol_analytics::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DependencyRepository with independently failing endpoints
#[derive(Default, Clone)]
pub struct MockDependencyRepository {
    dependencies: Vec<ServiceDependency>,
    cycles: Vec<DependencyCycle>,
    dependencies_failure: Option<ApiErrorKind>,
    cycles_failure: Option<ApiErrorKind>,
    pub created: Arc<Mutex<Vec<ServiceDependency>>>,
}

impl MockDependencyRepository {
    pub fn new(dependencies: Vec<ServiceDependency>) -> Self {
        Self {
            dependencies,
            ..Self::default()
        }
    }

    pub fn with_cycles(mut self, cycles: Vec<DependencyCycle>) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn failing_dependencies(mut self, kind: ApiErrorKind) -> Self {
        self.dependencies_failure = Some(kind);
        self
    }

    pub fn failing_cycles(mut self, kind: ApiErrorKind) -> Self {
        self.cycles_failure = Some(kind);
        self
    }

    pub fn created(&self) -> Vec<ServiceDependency> {
        self.created.lock().unwrap().clone()
    }

    fn failure(kind: ApiErrorKind, endpoint: &str) -> anyhow::Error {
        AnalyticsError::Api {
            kind,
            endpoint: endpoint.to_string(),
            details: "mock failure".to_string(),
        }
        .into()
    }
}

#[async_trait]
impl DependencyRepository for MockDependencyRepository {
    async fn fetch_dependencies(&self) -> Result<Vec<ServiceDependency>> {
        match self.dependencies_failure {
            Some(kind) => Err(Self::failure(kind, "/dependencies")),
            None => Ok(self.dependencies.clone()),
        }
    }

    async fn detect_circular_dependencies(&self) -> Result<Vec<DependencyCycle>> {
        match self.cycles_failure {
            Some(kind) => Err(Self::failure(kind, "/dependencies/cycles")),
            None => Ok(self.cycles.clone()),
        }
    }

    async fn create_dependency(&self, dependency: &ServiceDependency) -> Result<ServiceDependency> {
        self.created.lock().unwrap().push(dependency.clone());
        Ok(dependency.clone())
    }
}
