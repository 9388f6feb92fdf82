use clap::{Args as ClapArgs, Parser, Subcommand};
use devcontrol_analytics::analytics::domain::{DependencyType, ServiceDependency};
use devcontrol_analytics::analytics::services::FilterAssignment;
use devcontrol_analytics::application::dto::{DependencyRequest, OutputFormat, RiskRequest};
use devcontrol_analytics::config::API_TOKEN_ENV;
use std::path::PathBuf;

/// Resource risk scoring and service dependency analytics for DevControl
#[derive(Parser, Debug)]
#[command(name = "devcontrol")]
#[command(version)]
#[command(about = "Resource risk scoring and service dependency analytics for DevControl", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./devcontrol.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the DevControl API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Serve data from a local JSON snapshot instead of the API (--demo or --demo=PATH)
    #[arg(long, global = true, value_name = "SNAPSHOT", num_args = 0..=1, require_equals = true)]
    pub demo: Option<Option<PathBuf>>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Bearer token for the API
    #[arg(long, env = API_TOKEN_ENV, hide_env_values = true, hide = true)]
    pub api_token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score the account's security posture and list the riskiest resources
    Risk(RiskArgs),
    /// Search and filter service dependencies and show reported cycles
    Dependencies(DependencyArgs),
    /// Register a new dependency between two services
    AddDependency(AddDependencyArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RiskArgs {
    /// Number of highest-risk resources to list
    #[arg(long, default_value_t = RiskRequest::DEFAULT_TOP)]
    pub top: usize,

    /// Score from an earlier run, used to compute the trend
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub previous_score: Option<u8>,
}

impl RiskArgs {
    pub fn to_request(&self) -> RiskRequest {
        RiskRequest::new(self.top).with_previous_score(self.previous_score)
    }
}

#[derive(ClapArgs, Debug)]
pub struct DependencyArgs {
    /// Case-insensitive search over source and target service names
    #[arg(short, long, value_name = "QUERY", default_value = "")]
    pub search: String,

    /// Filter as key=value: type=<runtime|data|deployment|shared-lib|all>,
    /// critical=<true|false|all>, cycle=<true|false|all>. Can be repeated.
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<FilterAssignment>,
}

impl DependencyArgs {
    pub fn to_request(&self) -> DependencyRequest {
        DependencyRequest {
            query: self.search.clone(),
            filters: self.filters.clone(),
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct AddDependencyArgs {
    #[arg(long)]
    pub source_id: String,

    #[arg(long)]
    pub source_name: String,

    #[arg(long)]
    pub target_id: String,

    #[arg(long)]
    pub target_name: String,

    /// runtime, data, deployment or shared-lib
    #[arg(long = "type", value_name = "TYPE", default_value = "runtime")]
    pub dependency_type: DependencyType,

    /// Mark the dependency as critical
    #[arg(long)]
    pub critical: bool,
}

impl AddDependencyArgs {
    pub fn to_dependency(&self) -> ServiceDependency {
        ServiceDependency {
            source_service_id: self.source_id.clone(),
            source_service_name: self.source_name.clone(),
            target_service_id: self.target_id.clone(),
            target_service_name: self.target_name.clone(),
            dependency_type: self.dependency_type,
            is_critical: self.critical,
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
