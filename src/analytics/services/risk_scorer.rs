use crate::analytics::domain::{AggregateSecurityStats, Resource, RiskFactors, RiskScore, RiskTrend};
use crate::analytics::policies::{ComplianceSeverityWeights, ResourceRiskPoints, RiskWeights};
use chrono::{DateTime, Utc};

/// Minimum score movement, in points, before a trend is reported
const TREND_SENSITIVITY: i16 = 5;

/// A resource paired with its computed risk, used for risk-ordered listings
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResource<'a> {
    pub resource: &'a Resource,
    pub risk: u32,
    pub days_exposed: u64,
}

/// RiskScorer service for security posture scoring
///
/// This service contains pure business logic. It never fails: counters that
/// are missing upstream arrive here as zero.
pub struct RiskScorer;

impl RiskScorer {
    /// Computes the aggregate score without historical context
    ///
    /// The trend is always `Stable` because no earlier snapshot is known.
    pub fn calculate_risk_score(stats: &AggregateSecurityStats) -> RiskScore {
        Self::calculate_risk_score_with_history(stats, None)
    }

    /// Computes the aggregate score and compares it against an earlier score
    ///
    /// # Arguments
    /// * `stats` - Current account-wide counters
    /// * `previous_score` - Score from an earlier snapshot, if one exists
    pub fn calculate_risk_score_with_history(
        stats: &AggregateSecurityStats,
        previous_score: Option<u8>,
    ) -> RiskScore {
        if stats.total_resources == 0 {
            let trend = Self::trend(100, previous_score);
            return RiskScore::new(100, trend, RiskFactors::PERFECT);
        }

        let weights = RiskWeights::STANDARD;
        let total = stats.total_resources as f64;

        let encryption_ratio = ratio(stats.unencrypted_count as f64, total);
        let public_ratio = ratio(stats.public_count as f64, total);
        let backup_ratio = ratio(stats.missing_backup_count as f64, total);
        let compliance_ratio = ratio(Self::weighted_compliance_issues(stats), total);

        let deduction = weights.encryption * encryption_ratio
            + weights.public_access * public_ratio
            + weights.backup * backup_ratio
            + weights.compliance * compliance_ratio;

        let score = (100.0 - deduction).round().clamp(0.0, 100.0) as u8;

        let factors = RiskFactors {
            encryption: health(encryption_ratio),
            public_access: health(public_ratio),
            backup: health(backup_ratio),
            compliance: health(compliance_ratio),
        };

        RiskScore::new(score, Self::trend(score, previous_score), factors)
    }

    /// Per-resource risk in 0..=100, used for sort ordering only
    ///
    /// Depends solely on the resource's own fields and `now`, so identical
    /// inputs always rank identically.
    pub fn calculate_resource_risk(resource: &Resource, now: DateTime<Utc>) -> u32 {
        let points = ResourceRiskPoints::STANDARD;
        let mut risk = 0;

        if resource.is_public {
            risk += points.public;
        }
        if !resource.is_encrypted {
            risk += points.unencrypted;
        }

        let counted_issues = (resource.compliance_issues.len() as u32).min(points.max_counted_issues);
        risk += counted_issues * points.per_compliance_issue;

        if resource.is_exposed() {
            let days = Self::calculate_days_exposed(resource.first_discovered_at, now);
            let exposure = (days / points.exposure_days_per_point).min(points.max_exposure_points as u64);
            risk += exposure as u32;
        }

        risk
    }

    /// Orders resources from highest to lowest risk
    ///
    /// The sort is stable: resources with equal risk keep their input order.
    pub fn rank_resources_by_risk(resources: &[Resource], now: DateTime<Utc>) -> Vec<RankedResource<'_>> {
        let mut ranked: Vec<RankedResource<'_>> = resources
            .iter()
            .map(|resource| RankedResource {
                resource,
                risk: Self::calculate_resource_risk(resource, now),
                days_exposed: Self::calculate_days_exposed(resource.first_discovered_at, now),
            })
            .collect();

        ranked.sort_by(|a, b| b.risk.cmp(&a.risk));
        ranked
    }

    /// Whole days between discovery and `now`
    ///
    /// Floors partial days. Future and same-day timestamps give 0.
    pub fn calculate_days_exposed(first_discovered_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
        now.signed_duration_since(first_discovered_at)
            .num_days()
            .max(0) as u64
    }

    /// Same as `calculate_days_exposed` measured against the current clock
    pub fn days_exposed_since(first_discovered_at: DateTime<Utc>) -> u64 {
        Self::calculate_days_exposed(first_discovered_at, Utc::now())
    }

    fn weighted_compliance_issues(stats: &AggregateSecurityStats) -> f64 {
        let w = ComplianceSeverityWeights::STANDARD;
        let issues = &stats.compliance_issues;
        w.critical * issues.critical as f64
            + w.high * issues.high as f64
            + w.medium * issues.medium as f64
            + w.low * issues.low as f64
    }

    fn trend(score: u8, previous_score: Option<u8>) -> RiskTrend {
        let Some(previous) = previous_score else {
            return RiskTrend::Stable;
        };

        let delta = score as i16 - previous.min(100) as i16;
        if delta >= TREND_SENSITIVITY {
            RiskTrend::Improving
        } else if delta <= -TREND_SENSITIVITY {
            RiskTrend::Declining
        } else {
            RiskTrend::Stable
        }
    }
}

fn ratio(offending: f64, total: f64) -> f64 {
    (offending / total).clamp(0.0, 1.0)
}

fn health(offending_ratio: f64) -> u8 {
    (100.0 * (1.0 - offending_ratio)).round().clamp(0.0, 100.0) as u8
}
