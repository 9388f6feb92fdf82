//! Risk report read model
//!
//! Flattened view of the security posture score and the resources that
//! contribute most to it.

use crate::analytics::domain::{AggregateSecurityStats, RiskScore};
use crate::analytics::services::RankedResource;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the "highest risk" table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRiskView {
    pub id: String,
    pub resource_type: String,
    pub region: String,
    pub status: String,
    pub risk: u32,
    pub days_exposed: u64,
    pub is_public: bool,
    pub is_encrypted: bool,
    pub compliance_issue_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub estimated_monthly_cost: f64,
}

impl From<&RankedResource<'_>> for ResourceRiskView {
    fn from(ranked: &RankedResource<'_>) -> Self {
        let resource = ranked.resource;
        Self {
            id: resource.id.clone(),
            resource_type: resource.resource_type.to_string(),
            region: resource.region.clone(),
            status: resource.status.clone(),
            risk: ranked.risk,
            days_exposed: ranked.days_exposed,
            is_public: resource.is_public,
            is_encrypted: resource.is_encrypted,
            compliance_issue_count: resource.compliance_issues.len(),
            team_name: resource.team_name.clone(),
            service_name: resource.service_name.clone(),
            environment: resource.environment.clone(),
            estimated_monthly_cost: resource.estimated_monthly_cost,
        }
    }
}

/// Security posture report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub generated_at: DateTime<Utc>,
    pub risk: RiskScore,
    pub stats: AggregateSecurityStats,
    /// Resources considered for ranking, before the top-N cut
    pub ranked_resources: usize,
    pub top_resources: Vec<ResourceRiskView>,
}
