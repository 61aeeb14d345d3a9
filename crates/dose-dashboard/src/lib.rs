pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod summary;
pub mod telemetry;
