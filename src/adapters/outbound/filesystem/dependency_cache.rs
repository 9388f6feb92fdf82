use crate::analytics::domain::ServiceDependency;
use crate::ports::outbound::{CachedDependencies, DependencyCache};
use crate::shared::error::AnalyticsError;
use crate::shared::Result;
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the last-known dependency list, relative to the working directory
pub const DEFAULT_CACHE_PATH: &str = ".devcontrol/dependencies.json";

/// FileDependencyCache adapter storing the last successful dependency fetch as JSON
pub struct FileDependencyCache {
    path: PathBuf,
}

impl FileDependencyCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DependencyCache for FileDependencyCache {
    fn load(&self) -> Result<Option<CachedDependencies>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AnalyticsError::FileReadError {
                    path: self.path.clone(),
                    details: e.to_string(),
                }
                .into())
            }
        };

        match serde_json::from_str::<CachedDependencies>(&content) {
            Ok(cached) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = cached.dependencies.len(),
                    "Loaded cached dependencies"
                );
                Ok(Some(cached))
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unreadable dependency cache"
                );
                Ok(None)
            }
        }
    }

    fn store(&self, dependencies: &[ServiceDependency]) -> Result<()> {
        let write_error = |details: String| AnalyticsError::FileWriteError {
            path: self.path.clone(),
            details,
        };

        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
            }
        }

        let cached = CachedDependencies {
            saved_at: Utc::now(),
            dependencies: dependencies.to_vec(),
        };
        let json = serde_json::to_string_pretty(&cached)?;
        fs::write(&self.path, json).map_err(|e| write_error(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), count = dependencies.len(), "Stored dependency cache");
        Ok(())
    }
}

/// Cache that stores nothing, used when results must not outlive the run
pub struct NoopDependencyCache;

impl DependencyCache for NoopDependencyCache {
    fn load(&self) -> Result<Option<CachedDependencies>> {
        Ok(None)
    }

    fn store(&self, _dependencies: &[ServiceDependency]) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::DependencyType;
    use tempfile::TempDir;

    fn dependency() -> ServiceDependency {
        ServiceDependency {
            source_service_id: "svc-api".to_string(),
            source_service_name: "API Gateway".to_string(),
            target_service_id: "svc-auth".to_string(),
            target_service_name: "Auth Service".to_string(),
            dependency_type: DependencyType::Runtime,
            is_critical: true,
        }
    }

    #[test]
    fn test_missing_file_is_empty_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileDependencyCache::new(temp_dir.path().join("deps.json"));
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_store_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileDependencyCache::new(temp_dir.path().join("nested/dir/deps.json"));

        cache.store(&[dependency()]).unwrap();
        let cached = cache.load().unwrap().unwrap();

        assert_eq!(cached.dependencies, vec![dependency()]);
    }

    #[test]
    fn test_store_replaces_previous_list() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileDependencyCache::new(temp_dir.path().join("deps.json"));

        cache.store(&[dependency(), dependency()]).unwrap();
        cache.store(&[]).unwrap();

        assert!(cache.load().unwrap().unwrap().dependencies.is_empty());
    }

    #[test]
    fn test_noop_cache_never_returns_data() {
        let cache = NoopDependencyCache;
        cache.store(&[dependency()]).unwrap();
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_cache_is_treated_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deps.json");
        fs::write(&path, "{ not json").unwrap();

        let cache = FileDependencyCache::new(path);
        assert!(cache.load().unwrap().is_none());
    }
}
