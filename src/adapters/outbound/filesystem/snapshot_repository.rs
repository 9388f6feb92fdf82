use crate::analytics::domain::{AggregateSecurityStats, DependencyCycle, Resource, ServiceDependency};
use crate::ports::outbound::{DependencyRepository, ResourceRepository};
use crate::shared::error::AnalyticsError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of a demo snapshot
///
/// `stats` is optional; when absent the counters are derived from `resources`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Snapshot {
    resources: Vec<Resource>,
    stats: Option<AggregateSecurityStats>,
    dependencies: Vec<ServiceDependency>,
    cycles: Vec<DependencyCycle>,
}

/// SnapshotRepository adapter serving both repositories from a local JSON file
///
/// Used in demo mode in place of the network client. The snapshot is read
/// once at construction and is read-only afterwards.
pub struct SnapshotRepository {
    path: PathBuf,
    resources: Vec<Resource>,
    stats: AggregateSecurityStats,
    dependencies: Vec<ServiceDependency>,
    cycles: Vec<DependencyCycle>,
}

impl SnapshotRepository {
    /// Reads and parses the snapshot at `path`
    ///
    /// # Errors
    /// Returns `SnapshotReadError` if the file is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let read_error = |details: String| AnalyticsError::SnapshotReadError {
            path: path.clone(),
            details,
        };

        let content = fs::read_to_string(&path).map_err(|e| read_error(e.to_string()))?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| read_error(e.to_string()))?;

        let stats = snapshot
            .stats
            .unwrap_or_else(|| AggregateSecurityStats::from_resources(&snapshot.resources));

        tracing::info!(
            path = %path.display(),
            resources = snapshot.resources.len(),
            dependencies = snapshot.dependencies.len(),
            cycles = snapshot.cycles.len(),
            "Loaded demo snapshot"
        );

        Ok(Self {
            path,
            resources: snapshot.resources,
            stats,
            dependencies: snapshot.dependencies,
            cycles: snapshot.cycles,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResourceRepository for SnapshotRepository {
    async fn fetch_resources(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.clone())
    }

    async fn fetch_security_stats(&self) -> Result<AggregateSecurityStats> {
        Ok(self.stats)
    }
}

#[async_trait]
impl DependencyRepository for SnapshotRepository {
    async fn fetch_dependencies(&self) -> Result<Vec<ServiceDependency>> {
        Ok(self.dependencies.clone())
    }

    async fn detect_circular_dependencies(&self) -> Result<Vec<DependencyCycle>> {
        Ok(self.cycles.clone())
    }

    async fn create_dependency(&self, _dependency: &ServiceDependency) -> Result<ServiceDependency> {
        Err(AnalyticsError::Validation {
            message: format!(
                "demo mode is read-only; dependencies cannot be registered against snapshot {}",
                self.path.display()
            ),
        }
        .into())
    }
}
