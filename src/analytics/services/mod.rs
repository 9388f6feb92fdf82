pub mod cycle_index;
pub mod dependency_filter;
pub mod dependency_search;
pub mod risk_scorer;

pub use cycle_index::CycleIndex;
pub use dependency_filter::{DependencyFilters, FilterAssignment, FilterKey, Selection, NO_FILTER};
pub use dependency_search::{search, DependencySearch, DependencySearchIndex, SearchResult};
pub use risk_scorer::{RankedResource, RiskScorer};
