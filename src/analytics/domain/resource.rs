use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of AWS resource tracked by the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Ec2,
    Rds,
    S3,
    Lambda,
    Ecs,
    LoadBalancer,
    Vpc,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Ec2 => "ec2",
            ResourceType::Rds => "rds",
            ResourceType::S3 => "s3",
            ResourceType::Lambda => "lambda",
            ResourceType::Ecs => "ecs",
            ResourceType::LoadBalancer => "load-balancer",
            ResourceType::Vpc => "vpc",
        };
        write!(f, "{}", name)
    }
}

/// Severity of a single compliance finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    pub severity: IssueSeverity,
}

/// AWS inventory item as served by `GET /resources`
///
/// Treated as an immutable read model for the duration of one fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub resource_type: ResourceType,
    pub region: String,
    pub status: String,
    #[serde(default)]
    pub is_encrypted: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub estimated_monthly_cost: f64,
    pub first_discovered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default)]
    pub compliance_issues: Vec<ComplianceIssue>,
}

impl Resource {
    /// True when the resource is reachable from the internet or stores data in the clear
    pub fn is_exposed(&self) -> bool {
        self.is_public || !self.is_encrypted
    }
}
