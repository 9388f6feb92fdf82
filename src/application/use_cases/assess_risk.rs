use crate::analytics::services::RiskScorer;
use crate::application::dto::RiskRequest;
use crate::application::read_models::{ResourceRiskView, RiskReport};
use crate::ports::outbound::{ProgressReporter, ResourceRepository};
use crate::shared::Result;
use chrono::Utc;
use futures::TryFutureExt;
use std::cell::Cell;

/// Resource inventory and security stats
const FETCH_STEPS: usize = 2;

/// AssessRiskUseCase - Builds the security posture report
///
/// Fetches the inventory and the aggregate counters concurrently, scores
/// the counters and ranks the individual resources.
///
/// # Type Parameters
/// * `RR` - ResourceRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AssessRiskUseCase<RR, PR> {
    resource_repository: RR,
    progress_reporter: PR,
}

impl<RR, PR> AssessRiskUseCase<RR, PR>
where
    RR: ResourceRepository,
    PR: ProgressReporter,
{
    pub fn new(resource_repository: RR, progress_reporter: PR) -> Self {
        Self {
            resource_repository,
            progress_reporter,
        }
    }

    /// Executes the risk assessment
    ///
    /// # Errors
    /// Fails if either backend call fails. There is no fallback for
    /// resource data.
    pub async fn execute(&self, request: RiskRequest) -> Result<RiskReport> {
        self.progress_reporter
            .report("🔍 Fetching resource inventory and security stats...");

        let completed = Cell::new(0);
        let step_done = |label: &str| {
            completed.set(completed.get() + 1);
            self.progress_reporter
                .report_progress(completed.get(), FETCH_STEPS, Some(label));
        };
        let fetched = futures::try_join!(
            self.resource_repository
                .fetch_resources()
                .inspect_ok(|_| step_done("resources")),
            self.resource_repository
                .fetch_security_stats()
                .inspect_ok(|_| step_done("stats"))
        );
        let (resources, stats) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Risk assessment aborted");
                return Err(e);
            }
        };

        self.progress_reporter
            .report_completion(&format!("✅ Loaded {} resource(s)", resources.len()));

        let now = request.as_of.unwrap_or_else(Utc::now);
        let risk = RiskScorer::calculate_risk_score_with_history(&stats, request.previous_score);
        let ranked = RiskScorer::rank_resources_by_risk(&resources, now);

        tracing::info!(
            score = risk.score,
            grade = %risk.grade,
            trend = %risk.trend,
            resources = resources.len(),
            "Computed security score"
        );

        let top_resources = ranked
            .iter()
            .take(request.top)
            .map(ResourceRiskView::from)
            .collect();

        Ok(RiskReport {
            generated_at: now,
            risk,
            stats,
            ranked_resources: ranked.len(),
            top_resources,
        })
    }
}
