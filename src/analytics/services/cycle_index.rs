use crate::analytics::domain::{DependencyCycle, ServiceDependency};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Lookup structure over server-reported dependency cycles
///
/// Cycles are never detected here. The index only checks each reported
/// cycle against the edge list it will be displayed with, and answers
/// "is this edge part of a loop" for the cycle filter.
#[derive(Debug, Clone, Default)]
pub struct CycleIndex {
    cycles: Vec<DependencyCycle>,
    /// source id -> target ids of edges lying on a kept cycle
    cycle_edges: HashMap<String, HashSet<String>>,
    dropped: usize,
}

impl CycleIndex {
    /// Builds the index, discarding cycles that use edges absent from `dependencies`
    pub fn new(cycles: Vec<DependencyCycle>, dependencies: &[ServiceDependency]) -> Self {
        let known_edges: HashSet<(&str, &str)> = dependencies
            .iter()
            .map(|d| (d.source_service_id.as_str(), d.target_service_id.as_str()))
            .collect();

        let mut index = Self::default();
        for cycle in cycles {
            if cycle.is_empty() {
                index.dropped += 1;
                continue;
            }

            let missing = cycle
                .edges()
                .into_iter()
                .find(|edge| !known_edges.contains(edge));
            if let Some((from, to)) = missing {
                tracing::warn!(
                    cycle = %cycle,
                    missing_edge = %format!("{} -> {}", from, to),
                    "Ignoring reported cycle that uses an unknown dependency"
                );
                index.dropped += 1;
                continue;
            }

            for (from, to) in cycle.edges() {
                index
                    .cycle_edges
                    .entry(from.to_string())
                    .or_default()
                    .insert(to.to_string());
            }
            index.cycles.push(cycle);
        }

        index
    }

    /// An index with no cycles
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the dependency lies on at least one kept cycle
    pub fn contains(&self, dependency: &ServiceDependency) -> bool {
        self.cycle_edges
            .get(dependency.source_service_id.as_str())
            .is_some_and(|targets| targets.contains(dependency.target_service_id.as_str()))
    }

    pub fn cycles(&self) -> &[DependencyCycle] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Number of reported cycles rejected during construction
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Distinct service ids that take part in any kept cycle
    pub fn services(&self) -> BTreeSet<&str> {
        self.cycles
            .iter()
            .flat_map(|c| c.members().iter().map(String::as_str))
            .collect()
    }
}
