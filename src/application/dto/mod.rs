/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod dependency_request;
mod output_format;
mod risk_request;

pub use dependency_request::DependencyRequest;
pub use output_format::OutputFormat;
pub use risk_request::RiskRequest;
