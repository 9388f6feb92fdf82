use crate::analytics::domain::{DependencyType, ServiceDependency};
use crate::analytics::services::{CycleIndex, SearchResult};
use crate::shared::error::AnalyticsError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Sentinel value that disables a filter
pub const NO_FILTER: &str = "all";

/// Value held by a single filter key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// No filtering on this key
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{}", NO_FILTER),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Names of the filters that apply to a dependency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    DependencyType,
    Critical,
    InCycle,
}

impl FilterKey {
    pub const ALL: [FilterKey; 3] = [FilterKey::DependencyType, FilterKey::Critical, FilterKey::InCycle];
}

impl FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "type" | "dependency-type" | "dependency_type" => Ok(FilterKey::DependencyType),
            "critical" | "criticality" => Ok(FilterKey::Critical),
            "cycle" | "in-cycle" | "in_cycle" => Ok(FilterKey::InCycle),
            _ => Err(format!(
                "Invalid filter: {}. Please specify 'type', 'critical' or 'cycle'",
                s
            )),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKey::DependencyType => "type",
            FilterKey::Critical => "critical",
            FilterKey::InCycle => "cycle",
        };
        write!(f, "{}", name)
    }
}

/// A `key=value` pair as written on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterAssignment {
    pub key: FilterKey,
    pub value: String,
}

impl FromStr for FilterAssignment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid filter '{}'. Expected key=value, e.g. type=data", s))?;
        let assignment = Self {
            key: key.parse()?,
            value: value.trim().to_string(),
        };
        DependencyFilters::new()
            .apply_assignment(&assignment)
            .map_err(|e| e.to_string())?;
        Ok(assignment)
    }
}

/// Filter state applied after search
///
/// Every active key must accept a dependency for it to survive (logical AND).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependencyFilters {
    pub dependency_type: Selection<DependencyType>,
    pub critical: Selection<bool>,
    pub in_cycle: Selection<bool>,
}

impl DependencyFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one filter from its textual value
    ///
    /// `"all"` (any case) resets the key. Setting the same value twice
    /// leaves the filters unchanged.
    pub fn set_filter(&mut self, key: FilterKey, value: &str) -> Result<()> {
        let value = value.trim();
        let reset = value.eq_ignore_ascii_case(NO_FILTER);

        match key {
            FilterKey::DependencyType => {
                self.dependency_type = if reset {
                    Selection::All
                } else {
                    let parsed = DependencyType::from_str(value)
                        .map_err(|message| AnalyticsError::Validation { message })?;
                    Selection::Only(parsed)
                };
            }
            FilterKey::Critical => {
                self.critical = if reset {
                    Selection::All
                } else {
                    Selection::Only(parse_flag(key, value)?)
                };
            }
            FilterKey::InCycle => {
                self.in_cycle = if reset {
                    Selection::All
                } else {
                    Selection::Only(parse_flag(key, value)?)
                };
            }
        }

        Ok(())
    }

    pub fn apply_assignment(&mut self, assignment: &FilterAssignment) -> Result<()> {
        self.set_filter(assignment.key, &assignment.value)
    }

    pub fn set_dependency_type(&mut self, selection: Selection<DependencyType>) {
        self.dependency_type = selection;
    }

    pub fn set_critical(&mut self, selection: Selection<bool>) {
        self.critical = selection;
    }

    pub fn set_in_cycle(&mut self, selection: Selection<bool>) {
        self.in_cycle = selection;
    }

    /// Current textual value of a key, `"all"` when unset
    pub fn value_of(&self, key: FilterKey) -> String {
        match key {
            FilterKey::DependencyType => self.dependency_type.to_string(),
            FilterKey::Critical => self.critical.to_string(),
            FilterKey::InCycle => self.in_cycle.to_string(),
        }
    }

    fn is_key_active(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::DependencyType => !self.dependency_type.is_all(),
            FilterKey::Critical => !self.critical.is_all(),
            FilterKey::InCycle => !self.in_cycle.is_all(),
        }
    }

    /// Number of keys holding something other than the "all" sentinel
    pub fn active_filter_count(&self) -> usize {
        FilterKey::ALL
            .iter()
            .filter(|&&key| self.is_key_active(key))
            .count()
    }

    /// Active keys with their values, in declaration order
    pub fn active_filters(&self) -> Vec<(FilterKey, String)> {
        FilterKey::ALL
            .iter()
            .filter(|&&key| self.is_key_active(key))
            .map(|&key| (key, self.value_of(key)))
            .collect()
    }

    /// Resets every key in a single assignment
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, dependency: &ServiceDependency, cycles: &CycleIndex) -> bool {
        self.dependency_type.accepts(&dependency.dependency_type)
            && self.critical.accepts(&dependency.is_critical)
            && self.in_cycle.accepts(&cycles.contains(dependency))
    }

    /// Keeps the results every active filter accepts, preserving order
    ///
    /// With no active filter the input is returned unchanged.
    pub fn apply<'a>(&self, results: &[SearchResult<'a>], cycles: &CycleIndex) -> Vec<SearchResult<'a>> {
        if self.active_filter_count() == 0 {
            return results.to_vec();
        }

        results
            .iter()
            .filter(|result| self.matches(result.item, cycles))
            .cloned()
            .collect()
    }
}

fn parse_flag(key: FilterKey, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(AnalyticsError::Validation {
            message: format!(
                "Invalid value '{}' for filter '{}'. Expected true, false or all",
                value, key
            ),
        }
        .into()),
    }
}
