//! Report generation modules for different output formats
//!
//! This module contains report generators for the task plan:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//!
//! Graph formats (DOT, Mermaid) are drawn by
//! [`GraphRenderer`](crate::graph::GraphRenderer) since they need the graph
//! itself, not only the plan.

pub mod human;
pub mod json;

use crate::error::FerrisOrderError;
use crate::planner::TaskPlan;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a computed task plan
    fn generate_report(&self, plan: &TaskPlan) -> Result<String, FerrisOrderError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
