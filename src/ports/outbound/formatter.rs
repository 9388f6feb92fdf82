use crate::analytics::domain::ServiceDependency;
use crate::application::read_models::{DependencyReport, RiskReport};
use crate::shared::Result;

/// ReportFormatter port for rendering analytics reports
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Renders the security posture report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_risk(&self, report: &RiskReport) -> Result<String>;

    /// Renders the dependency search/filter report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_dependencies(&self, report: &DependencyReport) -> Result<String>;

    /// Renders the confirmation for a newly registered dependency
    fn format_registered(&self, dependency: &ServiceDependency) -> Result<String>;
}
