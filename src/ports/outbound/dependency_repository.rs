use crate::analytics::domain::{DependencyCycle, ServiceDependency};
use crate::shared::Result;
use async_trait::async_trait;

/// DependencyRepository port for the service dependency graph
///
/// Cycle detection happens behind this port. Callers only display what
/// `detect_circular_dependencies` returns.
#[async_trait]
pub trait DependencyRepository: Send + Sync {
    /// Fetches every dependency edge (`GET /dependencies`)
    async fn fetch_dependencies(&self) -> Result<Vec<ServiceDependency>>;

    /// Fetches the cycles found by the backend (`GET /dependencies/cycles`)
    async fn detect_circular_dependencies(&self) -> Result<Vec<DependencyCycle>>;

    /// Registers a new edge (`POST /dependencies`) and returns it as stored
    ///
    /// # Errors
    /// Returns an error if the backend rejects the edge or is unreachable
    async fn create_dependency(&self, dependency: &ServiceDependency) -> Result<ServiceDependency>;
}
