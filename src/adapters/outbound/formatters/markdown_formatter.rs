use crate::analytics::domain::ServiceDependency;
use crate::application::read_models::{DependencyReport, ResourceRiskView, RiskReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the highest-risk resources
const RESOURCE_TABLE_HEADER: &str =
    "| Resource | Type | Region | Risk | Days Exposed | Public | Encrypted | Issues | Team |\n";

const RESOURCE_TABLE_SEPARATOR: &str =
    "|----------|------|--------|------|--------------|--------|-----------|--------|------|\n";

/// Markdown table header for dependency edges
const DEPENDENCY_TABLE_HEADER: &str = "| Source | Target | Type | Critical | In Cycle | Match |\n";

const DEPENDENCY_TABLE_SEPARATOR: &str = "|--------|--------|------|----------|----------|-------|\n";

/// MarkdownFormatter adapter for human-readable reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn yes_no(value: bool) -> &'static str {
        if value {
            "yes"
        } else {
            "no"
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Risk report sections
impl MarkdownFormatter {
    fn render_score(&self, output: &mut String, report: &RiskReport) {
        let risk = &report.risk;
        output.push_str("## Security Score\n\n");
        output.push_str(&format!(
            "**{}** / 100 · Grade **{}** ({}) · Trend: {}\n\n",
            risk.score, risk.grade, risk.label, risk.trend
        ));
        output.push_str("| Factor | Health |\n|--------|--------|\n");
        output.push_str(&format!("| Encryption | {} |\n", risk.factors.encryption));
        output.push_str(&format!("| Public access | {} |\n", risk.factors.public_access));
        output.push_str(&format!("| Backup | {} |\n", risk.factors.backup));
        output.push_str(&format!("| Compliance | {} |\n", risk.factors.compliance));
        output.push('\n');
    }

    fn render_inventory(&self, output: &mut String, report: &RiskReport) {
        let stats = &report.stats;
        let issues = &stats.compliance_issues;
        output.push_str("## Inventory\n\n");
        output.push_str("| Metric | Count |\n|--------|-------|\n");
        output.push_str(&format!("| Total resources | {} |\n", stats.total_resources));
        output.push_str(&format!("| Unencrypted | {} |\n", stats.unencrypted_count));
        output.push_str(&format!("| Public | {} |\n", stats.public_count));
        output.push_str(&format!("| Missing backup | {} |\n", stats.missing_backup_count));
        output.push_str(&format!(
            "| Compliance issues | {} (critical {}, high {}, medium {}, low {}) |\n",
            issues.total(),
            issues.critical,
            issues.high,
            issues.medium,
            issues.low
        ));
        output.push_str(&format!("| Orphaned | {} |\n", stats.orphaned_count));
        output.push('\n');
    }

    fn render_top_resources(&self, output: &mut String, report: &RiskReport) {
        output.push_str("## Highest Risk Resources\n\n");
        if report.top_resources.is_empty() {
            output.push_str("_No resources found._\n");
            return;
        }

        output.push_str(&format!(
            "Showing {} of {} resources.\n\n",
            report.top_resources.len(),
            report.ranked_resources
        ));
        output.push_str(RESOURCE_TABLE_HEADER);
        output.push_str(RESOURCE_TABLE_SEPARATOR);
        for resource in &report.top_resources {
            self.render_resource_row(output, resource);
        }
        output.push('\n');
    }

    fn render_resource_row(&self, output: &mut String, resource: &ResourceRiskView) {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&resource.id),
            resource.resource_type,
            Self::escape_markdown_table_cell(&resource.region),
            resource.risk,
            resource.days_exposed,
            Self::yes_no(resource.is_public),
            Self::yes_no(resource.is_encrypted),
            resource.compliance_issue_count,
            Self::escape_markdown_table_cell(resource.team_name.as_deref().unwrap_or("-")),
        ));
    }
}

/// Dependency report sections
impl MarkdownFormatter {
    fn render_cache_notice(&self, output: &mut String, report: &DependencyReport) {
        if !report.from_cache {
            return;
        }
        let saved = report
            .cached_at
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "an unknown time".to_string());
        output.push_str(&format!(
            "> ⚠️ The live dependency list was unavailable. Showing the cached copy saved at {}.\n\n",
            saved
        ));
    }

    fn render_criteria(&self, output: &mut String, report: &DependencyReport) {
        if let Some(query) = &report.query {
            output.push_str(&format!("Search: `{}`\n\n", query.replace('`', "'")));
        }
        if !report.active_filters.is_empty() {
            let filters: Vec<String> = report
                .active_filters
                .iter()
                .map(|f| format!("`{}={}`", f.key, f.value))
                .collect();
            output.push_str(&format!("Filters: {}\n\n", filters.join(", ")));
        }
        if !report.ignored_filters.is_empty() {
            let filters: Vec<String> = report
                .ignored_filters
                .iter()
                .map(|f| format!("`{}={}`", f.key, f.value))
                .collect();
            output.push_str(&format!(
                "Not applied (cycle information is unavailable): {}\n\n",
                filters.join(", ")
            ));
        }
        output.push_str(&format!(
            "Showing {} of {} dependencies.\n\n",
            report.results.len(),
            report.total_dependencies
        ));
    }

    fn render_dependency_table(&self, output: &mut String, report: &DependencyReport) {
        if report.results.is_empty() {
            output.push_str("_No dependencies match._\n\n");
            return;
        }

        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for dep in &report.results {
            let score = dep
                .score
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&dep.source_service_name),
                Self::escape_markdown_table_cell(&dep.target_service_name),
                dep.dependency_type,
                Self::yes_no(dep.is_critical),
                Self::yes_no(dep.in_cycle),
                score
            ));
        }
        output.push('\n');
    }

    fn render_cycles(&self, output: &mut String, report: &DependencyReport) {
        output.push_str(&format!("## Circular Dependencies ({})\n\n", report.cycles.len()));

        if !report.cycles_available {
            output.push_str("_Cycle information is unavailable._\n");
            return;
        }
        if report.cycles.is_empty() {
            output.push_str("_No circular dependencies detected._\n");
        }
        for cycle in &report.cycles {
            output.push_str(&format!("- {}\n", cycle.path));
        }
        if report.dropped_cycles > 0 {
            output.push_str(&format!(
                "\n_{} reported cycle(s) ignored because they reference unknown dependencies._\n",
                report.dropped_cycles
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_risk(&self, report: &RiskReport) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Security Posture Report\n\n");
        output.push_str(&format!(
            "Generated {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        self.render_score(&mut output, report);
        self.render_inventory(&mut output, report);
        self.render_top_resources(&mut output, report);
        Ok(output)
    }

    fn format_dependencies(&self, report: &DependencyReport) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Service Dependencies\n\n");
        self.render_cache_notice(&mut output, report);
        self.render_criteria(&mut output, report);
        self.render_dependency_table(&mut output, report);
        self.render_cycles(&mut output, report);
        Ok(output)
    }

    fn format_registered(&self, dependency: &ServiceDependency) -> Result<String> {
        let critical = if dependency.is_critical { ", critical" } else { "" };
        Ok(format!(
            "Registered dependency **{}** (`{}`) → **{}** (`{}`): {}{}\n",
            dependency.source_service_name,
            dependency.source_service_id,
            dependency.target_service_name,
            dependency.target_service_id,
            dependency.dependency_type,
            critical
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::{
        AggregateSecurityStats, DependencyType, RiskFactors, RiskScore, RiskTrend,
    };
    use crate::application::read_models::{ActiveFilterView, CycleView, DependencyView};
    use chrono::{TimeZone, Utc};

    fn risk_report(top_resources: Vec<ResourceRiskView>) -> RiskReport {
        RiskReport {
            generated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            risk: RiskScore::new(
                62,
                RiskTrend::Declining,
                RiskFactors {
                    encryption: 50,
                    public_access: 80,
                    backup: 100,
                    compliance: 20,
                },
            ),
            stats: AggregateSecurityStats {
                total_resources: 2,
                unencrypted_count: 1,
                ..Default::default()
            },
            ranked_resources: 2,
            top_resources,
        }
    }

    fn resource_row(id: &str) -> ResourceRiskView {
        ResourceRiskView {
            id: id.to_string(),
            resource_type: "s3".to_string(),
            region: "eu-west-1".to_string(),
            status: "active".to_string(),
            risk: 80,
            days_exposed: 45,
            is_public: true,
            is_encrypted: false,
            compliance_issue_count: 2,
            team_name: Some("Platform".to_string()),
            service_name: None,
            environment: None,
            estimated_monthly_cost: 3.0,
        }
    }

    fn dependency_report() -> DependencyReport {
        DependencyReport {
            generated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            query: Some("auth".to_string()),
            active_filters: vec![ActiveFilterView {
                key: "critical".to_string(),
                value: "true".to_string(),
            }],
            ignored_filters: Vec::new(),
            total_dependencies: 4,
            results: vec![DependencyView {
                source_service_id: "api".to_string(),
                source_service_name: "API | Edge".to_string(),
                target_service_id: "auth".to_string(),
                target_service_name: "Auth".to_string(),
                dependency_type: DependencyType::Runtime,
                is_critical: true,
                in_cycle: true,
                score: Some(0.25),
            }],
            cycles: vec![CycleView {
                services: vec!["api".to_string(), "auth".to_string()],
                path: "api → auth → api".to_string(),
            }],
            dropped_cycles: 1,
            cycles_available: true,
            from_cache: false,
            cached_at: None,
        }
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(MarkdownFormatter::escape_markdown_table_cell("a|b\nc"), "a\\|b c");
    }

    #[test]
    fn test_format_risk_sections() {
        let output = MarkdownFormatter::new()
            .format_risk(&risk_report(vec![resource_row("bucket-1")]))
            .unwrap();

        assert!(output.starts_with("# Security Posture Report"));
        assert!(output.contains("**62** / 100 · Grade **C** (Fair) · Trend: declining"));
        assert!(output.contains("| Encryption | 50 |"));
        assert!(output.contains("| Unencrypted | 1 |"));
        assert!(output.contains("Showing 1 of 2 resources."));
        assert!(output.contains("| bucket-1 | s3 | eu-west-1 | 80 | 45 | yes | no | 2 | Platform |"));

        let score_pos = output.find("## Security Score").unwrap();
        let inventory_pos = output.find("## Inventory").unwrap();
        let resources_pos = output.find("## Highest Risk Resources").unwrap();
        assert!(score_pos < inventory_pos && inventory_pos < resources_pos);
    }

    #[test]
    fn test_format_risk_without_resources() {
        let output = MarkdownFormatter::new().format_risk(&risk_report(Vec::new())).unwrap();
        assert!(output.contains("_No resources found._"));
        assert!(!output.contains(RESOURCE_TABLE_HEADER));
    }

    #[test]
    fn test_format_dependencies() {
        let output = MarkdownFormatter::new()
            .format_dependencies(&dependency_report())
            .unwrap();

        assert!(output.contains("Search: `auth`"));
        assert!(output.contains("Filters: `critical=true`"));
        assert!(output.contains("Showing 1 of 4 dependencies."));
        assert!(output.contains("| API \\| Edge | Auth | runtime | yes | yes | 0.25 |"));
        assert!(output.contains("## Circular Dependencies (1)"));
        assert!(output.contains("- api → auth → api"));
        assert!(output.contains("1 reported cycle(s) ignored"));
        assert!(!output.contains("cached copy"));
    }

    #[test]
    fn test_format_dependencies_from_cache() {
        let mut report = dependency_report();
        report.from_cache = true;
        report.cached_at = Some(Utc.with_ymd_and_hms(2024, 5, 30, 8, 15, 0).unwrap());
        report.cycles_available = false;
        report.cycles.clear();

        let output = MarkdownFormatter::new().format_dependencies(&report).unwrap();
        assert!(output.contains("cached copy saved at 2024-05-30 08:15 UTC"));
        assert!(output.contains("_Cycle information is unavailable._"));
    }

    #[test]
    fn test_format_registered() {
        let dependency = ServiceDependency {
            source_service_id: "svc-api".to_string(),
            source_service_name: "API".to_string(),
            target_service_id: "svc-db".to_string(),
            target_service_name: "Orders DB".to_string(),
            dependency_type: DependencyType::Data,
            is_critical: true,
        };
        let output = MarkdownFormatter::new().format_registered(&dependency).unwrap();
        assert_eq!(
            output,
            "Registered dependency **API** (`svc-api`) → **Orders DB** (`svc-db`): data, critical\n"
        );
    }

    #[test]
    fn test_format_dependencies_empty_results() {
        let mut report = dependency_report();
        report.results.clear();
        report.query = None;
        report.active_filters.clear();

        let output = MarkdownFormatter::new().format_dependencies(&report).unwrap();
        assert!(output.contains("_No dependencies match._"));
        assert!(!output.contains("Search:"));
        assert!(!output.contains("Filters:"));
    }

    #[test]
    fn test_format_dependencies_notes_skipped_cycle_filter() {
        let mut report = dependency_report();
        report.cycles.clear();
        report.cycles_available = false;
        report.ignored_filters = vec![ActiveFilterView {
            key: "cycle".to_string(),
            value: "true".to_string(),
        }];

        let output = MarkdownFormatter::new().format_dependencies(&report).unwrap();
        assert!(output.contains("Not applied (cycle information is unavailable): `cycle=true`"));
        assert!(output.contains("_Cycle information is unavailable._"));
    }
}
