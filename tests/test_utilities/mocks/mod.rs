/// Mock implementations for testing
mod mock_dependency_cache;
mod mock_dependency_repository;
mod mock_progress_reporter;
mod mock_resource_repository;

pub use mock_dependency_cache::MockDependencyCache;
pub use mock_dependency_repository::MockDependencyRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resource_repository::MockResourceRepository;
