/// Use cases module containing application business logic orchestration
mod assess_risk;
mod explore_dependencies;
mod register_dependency;

pub use assess_risk::AssessRiskUseCase;
pub use explore_dependencies::ExploreDependenciesUseCase;
pub use register_dependency::RegisterDependencyUseCase;
