//! devcontrol-analytics - Resource risk and service dependency analytics for DevControl
//!
//! This library scores the security posture of an AWS resource inventory and
//! provides search, filtering and cycle display over the service dependency
//! graph served by the DevControl backend. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`analytics`): Pure scoring, search and filter logic
//! - **Application Layer** (`application`): Use cases, request DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): REST client, snapshot and cache files, console, formatters
//! - **Shared** (`shared`): Error types, logging and common utilities
//!
//! # Example
//!
//! ```no_run
//! use devcontrol_analytics::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let client = DevControlApiClient::new(ApiClientSettings {
//!     base_url: "https://api.devcontrol.example/v1".to_string(),
//!     api_token: std::env::var("DEVCONTROL_API_TOKEN").ok(),
//!     timeout: Duration::from_secs(10),
//!     retry: RetryPolicy::default(),
//! })?;
//!
//! let use_case = AssessRiskUseCase::new(client, StderrProgressReporter::new());
//! let report = use_case.execute(RiskRequest::new(5)).await?;
//!
//! println!("{}", MarkdownFormatter::new().format_risk(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod analytics;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileDependencyCache, FileSystemWriter, NoopDependencyCache, SnapshotRepository,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        retry_api_call, ApiClientSettings, Backoff, DevControlApiClient, RetryPolicy,
    };
    pub use crate::analytics::domain::{
        AggregateSecurityStats, ComplianceIssue, ComplianceIssueCounts, DependencyCycle,
        DependencyType, Grade, IssueSeverity, Resource, ResourceType, RiskFactors, RiskScore,
        RiskTrend, ServiceDependency,
    };
    pub use crate::analytics::services::{
        search, CycleIndex, DependencyFilters, DependencySearch, DependencySearchIndex,
        FilterAssignment, FilterKey, RankedResource, RiskScorer, SearchResult, Selection,
        NO_FILTER,
    };
    pub use crate::application::dto::{DependencyRequest, OutputFormat, RiskRequest};
    pub use crate::application::read_models::{
        DependencyReport, DependencyView, ResourceRiskView, RiskReport,
    };
    pub use crate::application::use_cases::{
        AssessRiskUseCase, ExploreDependenciesUseCase, RegisterDependencyUseCase,
    };
    pub use crate::ports::outbound::{
        CachedDependencies, DependencyCache, DependencyRepository, OutputPresenter,
        ProgressReporter, ReportFormatter, ResourceRepository,
    };
    pub use crate::shared::error::{AnalyticsError, ApiErrorKind, ExitCode};
    pub use crate::shared::Result;
}
