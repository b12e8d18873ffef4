//! econboard: chart adapter layer for economic-indicator dashboards.
//!
//! The crate projects two pre-aggregated record collections (a consumer
//! price index series and a provincial GDP breakdown) into declarative
//! chart configurations and hands each one to a pluggable rendering
//! capability bound to a named mount point.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardMounts};
pub use error::{DashboardError, DashboardResult};
