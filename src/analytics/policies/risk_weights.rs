use crate::analytics::domain::Grade;

/// RiskWeights policy for the aggregate weighted-deduction model
///
/// Each category deducts `weight × offending_ratio` from a perfect 100.
/// The weights sum to 100, so a fully offending account scores 0.
///
/// Priority order:
/// 1. encryption and public access (heaviest)
/// 2. compliance findings
/// 3. backup coverage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    pub encryption: f64,
    pub public_access: f64,
    pub compliance: f64,
    pub backup: f64,
}

impl RiskWeights {
    pub const STANDARD: RiskWeights = RiskWeights {
        encryption: 30.0,
        public_access: 30.0,
        compliance: 25.0,
        backup: 15.0,
    };

    pub fn total(&self) -> f64 {
        self.encryption + self.public_access + self.compliance + self.backup
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// How many "offending resources" one compliance finding counts as
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceSeverityWeights {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl ComplianceSeverityWeights {
    pub const STANDARD: ComplianceSeverityWeights = ComplianceSeverityWeights {
        critical: 4.0,
        high: 2.0,
        medium: 1.0,
        low: 0.5,
    };
}

/// Score cut-offs for each letter grade, checked from A downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeThresholds {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
}

impl GradeThresholds {
    pub const STANDARD: GradeThresholds = GradeThresholds {
        a: 90,
        b: 75,
        c: 60,
        d: 40,
    };

    pub fn grade_for(&self, score: u8) -> Grade {
        match score {
            s if s >= self.a => Grade::A,
            s if s >= self.b => Grade::B,
            s if s >= self.c => Grade::C,
            s if s >= self.d => Grade::D,
            _ => Grade::F,
        }
    }
}

/// Point table for the per-resource risk used in sort ordering
///
/// The maximums add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRiskPoints {
    pub public: u32,
    pub unencrypted: u32,
    pub per_compliance_issue: u32,
    pub max_counted_issues: u32,
    /// One point per this many whole days exposed
    pub exposure_days_per_point: u64,
    pub max_exposure_points: u32,
}

impl ResourceRiskPoints {
    pub const STANDARD: ResourceRiskPoints = ResourceRiskPoints {
        public: 40,
        unencrypted: 30,
        per_compliance_issue: 5,
        max_counted_issues: 4,
        exposure_days_per_point: 30,
        max_exposure_points: 10,
    };

    pub fn max_total(&self) -> u32 {
        self.public
            + self.unencrypted
            + self.per_compliance_issue * self.max_counted_issues
            + self.max_exposure_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_weights_sum_to_100() {
        assert_eq!(RiskWeights::STANDARD.total(), 100.0);
        assert_eq!(RiskWeights::default(), RiskWeights::STANDARD);
    }

    #[test]
    fn test_encryption_and_public_weigh_most() {
        let w = RiskWeights::STANDARD;
        assert!(w.encryption > w.compliance);
        assert!(w.public_access > w.compliance);
        assert!(w.compliance > w.backup);
    }

    #[test]
    fn test_resource_points_max_is_100() {
        assert_eq!(ResourceRiskPoints::STANDARD.max_total(), 100);
    }

    #[test]
    fn test_custom_grade_thresholds() {
        let strict = GradeThresholds {
            a: 95,
            b: 85,
            c: 70,
            d: 50,
        };
        assert_eq!(strict.grade_for(94), Grade::B);
        assert_eq!(strict.grade_for(50), Grade::D);
        assert_eq!(strict.grade_for(49), Grade::F);
    }
}
