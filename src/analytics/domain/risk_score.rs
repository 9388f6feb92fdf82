use crate::analytics::policies::GradeThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade for an aggregate risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// Step function over the score. Higher scores never yield a worse grade.
    pub fn from_score(score: u8) -> Self {
        GradeThresholds::STANDARD.grade_for(score)
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "Excellent",
            Grade::B => "Good",
            Grade::C => "Fair",
            Grade::D => "Poor",
            Grade::F => "Critical",
        }
    }

    /// CSS utility class used by dashboards to tint the grade
    pub fn color(self) -> &'static str {
        match self {
            Grade::A => "text-green-600",
            Grade::B => "text-lime-600",
            Grade::C => "text-yellow-600",
            Grade::D => "text-orange-600",
            Grade::F => "text-red-600",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// Direction of the score relative to an earlier snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTrend {
    Improving,
    Declining,
    /// Also used when no earlier snapshot is known
    #[default]
    Stable,
}

impl fmt::Display for RiskTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskTrend::Improving => "improving",
            RiskTrend::Declining => "declining",
            RiskTrend::Stable => "stable",
        };
        write!(f, "{}", name)
    }
}

/// Per-category health, 0 (every resource offends) to 100 (none do)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub encryption: u8,
    pub public_access: u8,
    pub backup: u8,
    pub compliance: u8,
}

impl RiskFactors {
    pub const PERFECT: RiskFactors = RiskFactors {
        encryption: 100,
        public_access: 100,
        backup: 100,
        compliance: 100,
    };
}

/// Derived security posture. Never persisted; recomputed from current stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    pub score: u8,
    pub grade: Grade,
    pub label: String,
    pub color: String,
    pub trend: RiskTrend,
    pub factors: RiskFactors,
}

impl RiskScore {
    /// Builds a score, clamping to 0..=100 and deriving the grade fields
    pub fn new(score: u8, trend: RiskTrend, factors: RiskFactors) -> Self {
        let score = score.min(100);
        let grade = Grade::from_score(score);
        Self {
            score,
            grade,
            label: grade.label().to_string(),
            color: grade.color().to_string(),
            trend,
            factors,
        }
    }
}
