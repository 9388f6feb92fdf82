use crate::analytics::domain::ServiceDependency;
use crate::ports::outbound::{DependencyRepository, ProgressReporter};
use crate::shared::Result;

/// RegisterDependencyUseCase - Adds an edge to the service dependency graph
///
/// # Type Parameters
/// * `DR` - DependencyRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct RegisterDependencyUseCase<DR, PR> {
    dependency_repository: DR,
    progress_reporter: PR,
}

impl<DR, PR> RegisterDependencyUseCase<DR, PR>
where
    DR: DependencyRepository,
    PR: ProgressReporter,
{
    pub fn new(dependency_repository: DR, progress_reporter: PR) -> Self {
        Self {
            dependency_repository,
            progress_reporter,
        }
    }

    /// Validates the edge locally, then submits it
    ///
    /// # Errors
    /// `Validation` for empty ids or names and self edges; otherwise
    /// whatever the backend returns
    pub async fn execute(&self, dependency: ServiceDependency) -> Result<ServiceDependency> {
        dependency.validate()?;

        self.progress_reporter.report(&format!(
            "📤 Registering dependency {} → {}...",
            dependency.source_service_name, dependency.target_service_name
        ));

        let created = self.dependency_repository.create_dependency(&dependency).await?;

        tracing::info!(
            source = %created.source_service_id,
            target = %created.target_service_id,
            dependency_type = %created.dependency_type,
            "Dependency registered"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Registered {} → {} ({})",
            created.source_service_name, created.target_service_name, created.dependency_type
        ));

        Ok(created)
    }
}
