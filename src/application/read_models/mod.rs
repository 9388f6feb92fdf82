//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for reports.

pub mod dependency_report;
pub mod risk_report;

pub use dependency_report::{ActiveFilterView, CycleView, DependencyReport, DependencyView};
pub use risk_report::{ResourceRiskView, RiskReport};
