use chrono::{DateTime, Duration, TimeZone, Utc};
use devcontrol_analytics::prelude::*;

/// Fixed reference time for exposure calculations
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

pub fn resource(id: &str, is_public: bool, is_encrypted: bool, age_days: i64) -> Resource {
    Resource {
        id: id.to_string(),
        resource_type: ResourceType::S3,
        region: "us-east-1".to_string(),
        status: "active".to_string(),
        is_encrypted,
        is_public,
        estimated_monthly_cost: 1.0,
        first_discovered_at: fixed_now() - Duration::days(age_days),
        team_name: Some("platform".to_string()),
        service_name: None,
        environment: Some("prod".to_string()),
        compliance_issues: Vec::new(),
    }
}

pub fn dependency(
    source: (&str, &str),
    target: (&str, &str),
    dependency_type: DependencyType,
    is_critical: bool,
) -> ServiceDependency {
    ServiceDependency {
        source_service_id: source.0.to_string(),
        source_service_name: source.1.to_string(),
        target_service_id: target.0.to_string(),
        target_service_name: target.1.to_string(),
        dependency_type,
        is_critical,
    }
}

/// Three services in a loop plus one edge out of it:
/// api → auth → users → api, and users → billing
pub fn service_graph() -> Vec<ServiceDependency> {
    vec![
        dependency(("api", "API Gateway"), ("auth", "Auth Service"), DependencyType::Runtime, true),
        dependency(("auth", "Auth Service"), ("users", "User Store"), DependencyType::Data, true),
        dependency(("users", "User Store"), ("api", "API Gateway"), DependencyType::Runtime, false),
        dependency(("users", "User Store"), ("billing", "Billing"), DependencyType::SharedLib, false),
    ]
}

pub fn cycle(ids: &[&str]) -> DependencyCycle {
    DependencyCycle::new(ids.iter().map(|s| s.to_string()).collect())
}
