pub mod dependency;
pub mod resource;
pub mod risk_score;
pub mod security_stats;

pub use dependency::{DependencyCycle, DependencyType, ServiceDependency};
pub use resource::{ComplianceIssue, IssueSeverity, Resource, ResourceType};
pub use risk_score::{Grade, RiskFactors, RiskScore, RiskTrend};
pub use security_stats::{AggregateSecurityStats, ComplianceIssueCounts};
