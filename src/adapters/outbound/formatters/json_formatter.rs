use crate::analytics::domain::ServiceDependency;
use crate::application::read_models::{DependencyReport, RiskReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering reports as pretty-printed JSON
///
/// Field names follow the backend's camelCase convention so the output can
/// be fed back to tooling that already consumes the API.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_risk(&self, report: &RiskReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_dependencies(&self, report: &DependencyReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_registered(&self, dependency: &ServiceDependency) -> Result<String> {
        Ok(serde_json::to_string_pretty(dependency)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::{
        AggregateSecurityStats, DependencyType, RiskFactors, RiskScore, RiskTrend,
    };
    use crate::application::read_models::{ActiveFilterView, DependencyView, ResourceRiskView};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    #[test]
    fn test_format_risk() {
        let report = RiskReport {
            generated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            risk: RiskScore::new(85, RiskTrend::Improving, RiskFactors::PERFECT),
            stats: AggregateSecurityStats {
                total_resources: 10,
                public_count: 5,
                ..Default::default()
            },
            ranked_resources: 1,
            top_resources: vec![ResourceRiskView {
                id: "i-1".to_string(),
                resource_type: "ec2".to_string(),
                region: "us-east-1".to_string(),
                status: "running".to_string(),
                risk: 70,
                days_exposed: 12,
                is_public: true,
                is_encrypted: true,
                compliance_issue_count: 0,
                team_name: None,
                service_name: None,
                environment: None,
                estimated_monthly_cost: 12.5,
            }],
        };

        let json: Value = serde_json::from_str(&JsonFormatter::new().format_risk(&report).unwrap()).unwrap();
        assert_eq!(json["risk"]["score"], 85);
        assert_eq!(json["risk"]["grade"], "B");
        assert_eq!(json["risk"]["trend"], "improving");
        assert_eq!(json["risk"]["factors"]["publicAccess"], 100);
        assert_eq!(json["stats"]["publicCount"], 5);
        assert_eq!(json["topResources"][0]["daysExposed"], 12);
        assert!(json["topResources"][0].get("teamName").is_none());
    }

    #[test]
    fn test_format_registered_uses_wire_names() {
        let dependency = ServiceDependency {
            source_service_id: "a".to_string(),
            source_service_name: "A".to_string(),
            target_service_id: "b".to_string(),
            target_service_name: "B".to_string(),
            dependency_type: DependencyType::Deployment,
            is_critical: false,
        };
        let json: Value =
            serde_json::from_str(&JsonFormatter::new().format_registered(&dependency).unwrap()).unwrap();
        assert_eq!(json["sourceServiceId"], "a");
        assert_eq!(json["dependencyType"], "deployment");
    }

    #[test]
    fn test_format_dependencies() {
        let report = DependencyReport {
            generated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            query: Some("auth".to_string()),
            active_filters: vec![ActiveFilterView {
                key: "type".to_string(),
                value: "runtime".to_string(),
            }],
            ignored_filters: Vec::new(),
            total_dependencies: 3,
            results: vec![DependencyView {
                source_service_id: "a".to_string(),
                source_service_name: "API".to_string(),
                target_service_id: "b".to_string(),
                target_service_name: "Auth".to_string(),
                dependency_type: DependencyType::SharedLib,
                is_critical: true,
                in_cycle: false,
                score: Some(0.25),
            }],
            cycles: Vec::new(),
            dropped_cycles: 0,
            cycles_available: true,
            from_cache: false,
            cached_at: None,
        };

        let json: Value =
            serde_json::from_str(&JsonFormatter::new().format_dependencies(&report).unwrap()).unwrap();
        assert_eq!(json["query"], "auth");
        assert_eq!(json["results"][0]["dependencyType"], "shared-lib");
        assert_eq!(json["results"][0]["score"], 0.25);
        assert_eq!(json["fromCache"], false);
        assert!(json.get("cachedAt").is_none());
        assert!(json.get("ignoredFilters").is_none());
    }
}
