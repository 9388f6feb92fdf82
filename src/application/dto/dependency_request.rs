use crate::analytics::services::FilterAssignment;

/// Input for the dependency search and filter report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyRequest {
    pub query: String,
    /// Applied in order; a later assignment for the same key wins
    pub filters: Vec<FilterAssignment>,
}

impl DependencyRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: FilterAssignment) -> Self {
        self.filters.push(filter);
        self
    }
}
