pub mod risk_weights;

pub use risk_weights::{ComplianceSeverityWeights, GradeThresholds, ResourceRiskPoints, RiskWeights};
