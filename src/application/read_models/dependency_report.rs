//! Dependency report read model

use crate::analytics::domain::{DependencyCycle, DependencyType};
use crate::analytics::services::{CycleIndex, SearchResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One dependency edge as displayed, annotated with search and cycle data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyView {
    pub source_service_id: String,
    pub source_service_name: String,
    pub target_service_id: String,
    pub target_service_name: String,
    pub dependency_type: DependencyType,
    pub is_critical: bool,
    pub in_cycle: bool,
    /// Match quality, 0 is best. Absent when no query was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl DependencyView {
    pub fn new(result: &SearchResult<'_>, cycles: &CycleIndex) -> Self {
        let dep = result.item;
        Self {
            source_service_id: dep.source_service_id.clone(),
            source_service_name: dep.source_service_name.clone(),
            target_service_id: dep.target_service_id.clone(),
            target_service_name: dep.target_service_name.clone(),
            dependency_type: dep.dependency_type,
            is_critical: dep.is_critical,
            in_cycle: cycles.contains(dep),
            score: result.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleView {
    pub services: Vec<String>,
    pub path: String,
}

impl From<&DependencyCycle> for CycleView {
    fn from(cycle: &DependencyCycle) -> Self {
        Self {
            services: cycle.members().to_vec(),
            path: cycle.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilterView {
    pub key: String,
    pub value: String,
}

/// Dependency search and filter report
///
/// `from_cache` is set when the live fetch failed and the last stored list
/// was used instead. `cycles_available` is false when the cycle lookup
/// failed, in which case `cycles` is empty rather than authoritative and any
/// cycle filter is moved to `ignored_filters` instead of being applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub active_filters: Vec<ActiveFilterView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_filters: Vec<ActiveFilterView>,
    pub total_dependencies: usize,
    pub results: Vec<DependencyView>,
    pub cycles: Vec<CycleView>,
    pub dropped_cycles: usize,
    pub cycles_available: bool,
    pub from_cache: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<DateTime<Utc>>,
}
