/// Filesystem adapters for file I/O operations
mod dependency_cache;
mod file_writer;
mod snapshot_repository;

pub use dependency_cache::{FileDependencyCache, NoopDependencyCache, DEFAULT_CACHE_PATH};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use snapshot_repository::SnapshotRepository;
