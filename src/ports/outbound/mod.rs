/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (backend API, file system, console).
pub mod dependency_cache;
pub mod dependency_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod resource_repository;

pub use dependency_cache::{CachedDependencies, DependencyCache};
pub use dependency_repository::DependencyRepository;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use resource_repository::ResourceRepository;
