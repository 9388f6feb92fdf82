use crate::analytics::domain::ServiceDependency;
use crate::analytics::services::{CycleIndex, DependencyFilters, DependencySearch, FilterKey, Selection};
use crate::application::dto::DependencyRequest;
use crate::application::read_models::{
    ActiveFilterView, CycleView, DependencyReport, DependencyView,
};
use crate::ports::outbound::{DependencyCache, DependencyRepository, ProgressReporter};
use crate::shared::error::{api_error_kind, AnalyticsError};
use crate::shared::Result;
use chrono::{DateTime, Utc};
use futures::FutureExt;
use std::cell::Cell;

/// Dependency list and cycle list
const FETCH_STEPS: usize = 2;

/// Where the displayed dependency list came from
struct DependencySource {
    dependencies: Vec<ServiceDependency>,
    cached_at: Option<DateTime<Utc>>,
}

/// ExploreDependenciesUseCase - Search, filter and cycle display for the dependency graph
///
/// The dependency list and the server-side cycle report are fetched
/// concurrently. A successful list is written to the cache; a failed one
/// falls back to the cache. A failed cycle lookup never fails the report.
///
/// # Type Parameters
/// * `DR` - DependencyRepository implementation
/// * `DC` - DependencyCache implementation
/// * `PR` - ProgressReporter implementation
pub struct ExploreDependenciesUseCase<DR, DC, PR> {
    dependency_repository: DR,
    dependency_cache: DC,
    progress_reporter: PR,
}

impl<DR, DC, PR> ExploreDependenciesUseCase<DR, DC, PR>
where
    DR: DependencyRepository,
    DC: DependencyCache,
    PR: ProgressReporter,
{
    pub fn new(dependency_repository: DR, dependency_cache: DC, progress_reporter: PR) -> Self {
        Self {
            dependency_repository,
            dependency_cache,
            progress_reporter,
        }
    }

    /// Executes the dependency report
    ///
    /// # Errors
    /// - `Validation` for an unknown filter key or value, before any fetch
    /// - `DependenciesUnavailable` when the fetch fails and nothing is cached
    pub async fn execute(&self, request: DependencyRequest) -> Result<DependencyReport> {
        let mut filters = DependencyFilters::new();
        for assignment in &request.filters {
            filters.apply_assignment(assignment)?;
        }

        self.progress_reporter
            .report("🔍 Fetching service dependencies and cycles...");

        let completed = Cell::new(0);
        let step_done = |label: &str| {
            completed.set(completed.get() + 1);
            self.progress_reporter
                .report_progress(completed.get(), FETCH_STEPS, Some(label));
        };
        let (dependencies_result, cycles_result) = futures::join!(
            self.dependency_repository
                .fetch_dependencies()
                .inspect(|_| step_done("dependencies")),
            self.dependency_repository
                .detect_circular_dependencies()
                .inspect(|_| step_done("cycles"))
        );

        let source = match dependencies_result {
            Ok(dependencies) => {
                if let Err(e) = self.dependency_cache.store(&dependencies) {
                    tracing::warn!(error = %format!("{:#}", e), "Failed to update dependency cache");
                }
                DependencySource {
                    dependencies,
                    cached_at: None,
                }
            }
            Err(e) => match self.load_cached(e) {
                Ok(source) => source,
                Err(e) => {
                    self.progress_reporter
                        .report_error("❌ Dependency report aborted");
                    return Err(e);
                }
            },
        };

        let (cycles, cycles_available) = match cycles_result {
            Ok(cycles) => (CycleIndex::new(cycles, &source.dependencies), true),
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "Cycle detection request failed");
                self.progress_reporter.report_warning(&format!(
                    "Circular dependency information is unavailable: {}",
                    api_error_kind(&e).user_message()
                ));
                (CycleIndex::empty(), false)
            }
        };

        let mut ignored_filters = Vec::new();
        if !cycles_available && !filters.in_cycle.is_all() {
            ignored_filters.push(ActiveFilterView {
                key: FilterKey::InCycle.to_string(),
                value: filters.value_of(FilterKey::InCycle),
            });
            filters.set_in_cycle(Selection::All);
            self.progress_reporter.report_warning(
                "The cycle filter was not applied because cycle information is unavailable.",
            );
        }

        let mut search = DependencySearch::new(&source.dependencies);
        search.set_query(request.query.as_str());
        let filtered = filters.apply(search.results(), &cycles);

        self.progress_reporter.report_completion(&format!(
            "✅ {} of {} dependencies match",
            filtered.len(),
            source.dependencies.len()
        ));

        let query = search
            .has_active_search()
            .then(|| search.query().trim().to_string());

        Ok(DependencyReport {
            generated_at: Utc::now(),
            query,
            active_filters: filters
                .active_filters()
                .into_iter()
                .map(|(key, value)| ActiveFilterView {
                    key: key.to_string(),
                    value,
                })
                .collect(),
            ignored_filters,
            total_dependencies: source.dependencies.len(),
            results: filtered
                .iter()
                .map(|result| DependencyView::new(result, &cycles))
                .collect(),
            cycles: cycles.cycles().iter().map(CycleView::from).collect(),
            dropped_cycles: cycles.dropped_count(),
            cycles_available,
            from_cache: source.cached_at.is_some(),
            cached_at: source.cached_at,
        })
    }

    fn load_cached(&self, fetch_error: anyhow::Error) -> Result<DependencySource> {
        let kind = api_error_kind(&fetch_error);
        tracing::warn!(
            kind = %kind,
            error = %format!("{:#}", fetch_error),
            "Dependency fetch failed, trying cache"
        );

        let cached = match self.dependency_cache.load() {
            Ok(cached) => cached,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "Dependency cache is unreadable");
                None
            }
        };

        match cached {
            Some(cached) => {
                self.progress_reporter.report_warning(&format!(
                    "{} Showing {} cached dependencies saved at {}.",
                    kind.user_message(),
                    cached.dependencies.len(),
                    cached.saved_at.format("%Y-%m-%d %H:%M UTC")
                ));
                Ok(DependencySource {
                    dependencies: cached.dependencies,
                    cached_at: Some(cached.saved_at),
                })
            }
            None => Err(fetch_error.context(AnalyticsError::DependenciesUnavailable {
                details: kind.user_message().to_string(),
            })),
        }
    }
}
