//! dashchart: vector-chart geometry core with an SVG rendering backend.
//!
//! The crate keeps a strict split between the pure geometry layer
//! (`core`), the backend-agnostic scene model (`render`), and the
//! dashboard-facing orchestration API (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DashboardData, DashboardEngine, DashboardScene};
pub use error::{ChartError, ChartResult};
