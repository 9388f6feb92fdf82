use chrono::{DateTime, Utc};
use devcontrol_analytics::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory DependencyCache whose contents can be inspected after a run
#[derive(Default, Clone)]
pub struct MockDependencyCache {
    pub stored: Arc<Mutex<Option<CachedDependencies>>>,
}

impl MockDependencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cached(dependencies: Vec<ServiceDependency>, saved_at: DateTime<Utc>) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Some(CachedDependencies {
                saved_at,
                dependencies,
            }))),
        }
    }

    pub fn contents(&self) -> Option<CachedDependencies> {
        self.stored.lock().unwrap().clone()
    }
}

impl DependencyCache for MockDependencyCache {
    fn load(&self) -> Result<Option<CachedDependencies>> {
        Ok(self.contents())
    }

    fn store(&self, dependencies: &[ServiceDependency]) -> Result<()> {
        *self.stored.lock().unwrap() = Some(CachedDependencies {
            saved_at: Utc::now(),
            dependencies: dependencies.to_vec(),
        });
        Ok(())
    }
}
