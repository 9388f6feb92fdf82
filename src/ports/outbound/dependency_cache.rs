use crate::analytics::domain::ServiceDependency;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last dependency list fetched successfully, kept for offline display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedDependencies {
    pub saved_at: DateTime<Utc>,
    pub dependencies: Vec<ServiceDependency>,
}

/// DependencyCache port for the last-known dependency list
///
/// The cache is a plain key-value blob with no schema versioning. A blob
/// that cannot be parsed is treated as absent.
pub trait DependencyCache {
    /// Returns the cached list, or `None` if nothing usable is stored
    fn load(&self) -> Result<Option<CachedDependencies>>;

    /// Replaces the cached list
    fn store(&self, dependencies: &[ServiceDependency]) -> Result<()>;
}
