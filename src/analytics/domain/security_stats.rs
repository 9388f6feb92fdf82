use super::resource::{IssueSeverity, Resource};
use serde::{Deserialize, Serialize};

/// Open compliance findings bucketed by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceIssueCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl ComplianceIssueCounts {
    pub fn total(&self) -> u64 {
        self.critical
            .saturating_add(self.high)
            .saturating_add(self.medium)
            .saturating_add(self.low)
    }

    pub fn record(&mut self, severity: IssueSeverity) {
        match severity {
            IssueSeverity::Critical => self.critical += 1,
            IssueSeverity::High => self.high += 1,
            IssueSeverity::Medium => self.medium += 1,
            IssueSeverity::Low => self.low += 1,
        }
    }
}

/// Account-wide security counters as served by `GET /resources/stats`
///
/// Every field defaults to zero when the backend omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregateSecurityStats {
    pub total_resources: u64,
    pub unencrypted_count: u64,
    pub public_count: u64,
    pub missing_backup_count: u64,
    pub compliance_issues: ComplianceIssueCounts,
    pub orphaned_count: u64,
}

impl AggregateSecurityStats {
    /// Derives the counters that are observable on the inventory itself.
    ///
    /// Backup coverage and orphan detection are only known to the backend,
    /// so those counters stay at zero.
    pub fn from_resources(resources: &[Resource]) -> Self {
        let mut stats = Self {
            total_resources: resources.len() as u64,
            ..Self::default()
        };

        for resource in resources {
            if !resource.is_encrypted {
                stats.unencrypted_count += 1;
            }
            if resource.is_public {
                stats.public_count += 1;
            }
            for issue in &resource.compliance_issues {
                stats.compliance_issues.record(issue.severity);
            }
        }

        stats
    }
}
