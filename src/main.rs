mod cli;

use cli::{Args, Command};
use devcontrol_analytics::adapters::outbound::console::StderrProgressReporter;
use devcontrol_analytics::adapters::outbound::filesystem::{
    FileDependencyCache, NoopDependencyCache, SnapshotRepository,
};
use devcontrol_analytics::adapters::outbound::network::DevControlApiClient;
use devcontrol_analytics::application::dto::{DependencyRequest, RiskRequest};
use devcontrol_analytics::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use devcontrol_analytics::application::use_cases::{
    AssessRiskUseCase, ExploreDependenciesUseCase, RegisterDependencyUseCase,
};
use devcontrol_analytics::config::{self, AppConfig, ConfigOverrides};
use devcontrol_analytics::ports::outbound::{
    DependencyCache, DependencyRepository, ProgressReporter, ReportFormatter, ResourceRepository,
};
use devcontrol_analytics::shared::error::ExitCode;
use devcontrol_analytics::shared::logging::init_tracing;
use devcontrol_analytics::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        StderrProgressReporter::new().report_error(&error_chain(&e));
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn error_chain(error: &anyhow::Error) -> String {
    let mut message = format!("\n❌ An error occurred:\n\n{}", error);
    let mut source = error.source();
    while let Some(err) = source {
        message.push_str(&format!("\n\nCaused by: {}", err));
        source = err.source();
    }
    message.push('\n');
    message
}

async fn run(args: Args) -> Result<()> {
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let config = AppConfig::resolve(
        config_file,
        ConfigOverrides {
            api_url: args.api_url.clone(),
            api_token: args.api_token.clone(),
            demo: args.demo.clone(),
            format: args.format,
        },
    )?;

    if config.demo_mode {
        tracing::info!(snapshot = %config.snapshot_path.display(), "Demo mode");
    } else {
        tracing::info!(api_url = %config.api_url, "Using DevControl API");
        if config.api_token.is_none() {
            tracing::warn!("{} is not set; requests are sent unauthenticated", config::API_TOKEN_ENV);
        }
    }

    let formatter = FormatterFactory::create(config.format);
    let output = match &args.command {
        Command::Risk(risk) => {
            let request = risk.to_request();
            if config.demo_mode {
                let snapshot = SnapshotRepository::load(&config.snapshot_path)?;
                render_risk(snapshot, request, formatter.as_ref(), &config).await?
            } else {
                let client = DevControlApiClient::new(config.api_client_settings())?;
                render_risk(client, request, formatter.as_ref(), &config).await?
            }
        }
        Command::Dependencies(deps) => {
            let request = deps.to_request();
            if config.demo_mode {
                let snapshot = SnapshotRepository::load(&config.snapshot_path)?;
                render_dependencies(snapshot, NoopDependencyCache, request, formatter.as_ref(), &config)
                    .await?
            } else {
                let client = DevControlApiClient::new(config.api_client_settings())?;
                let cache = FileDependencyCache::new(config.cache_path.clone());
                render_dependencies(client, cache, request, formatter.as_ref(), &config).await?
            }
        }
        Command::AddDependency(add) => {
            let dependency = add.to_dependency();
            let created = if config.demo_mode {
                let snapshot = SnapshotRepository::load(&config.snapshot_path)?;
                RegisterDependencyUseCase::new(snapshot, StderrProgressReporter::new())
                    .execute(dependency)
                    .await?
            } else {
                let client = DevControlApiClient::new(config.api_client_settings())?;
                RegisterDependencyUseCase::new(client, StderrProgressReporter::new())
                    .execute(dependency)
                    .await?
            };
            formatter.format_registered(&created)?
        }
    };

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&output)?;

    Ok(())
}

async fn render_risk<R: ResourceRepository>(
    repository: R,
    request: RiskRequest,
    formatter: &dyn ReportFormatter,
    config: &AppConfig,
) -> Result<String> {
    let use_case = AssessRiskUseCase::new(repository, StderrProgressReporter::new());
    let report = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(config.format));
    formatter.format_risk(&report)
}

async fn render_dependencies<R: DependencyRepository, C: DependencyCache>(
    repository: R,
    cache: C,
    request: DependencyRequest,
    formatter: &dyn ReportFormatter,
    config: &AppConfig,
) -> Result<String> {
    let use_case = ExploreDependenciesUseCase::new(repository, cache, StderrProgressReporter::new());
    let report = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(config.format));
    formatter.format_dependencies(&report)
}
