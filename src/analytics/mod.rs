//! Analytics domain - Pure risk scoring and dependency analytics
//!
//! Nothing in this layer performs I/O. Every function operates on data
//! already fetched by the application layer and is total over its inputs.

pub mod domain;
pub mod policies;
pub mod services;
