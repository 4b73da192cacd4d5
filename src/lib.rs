//! # Ferris Order - Line Up Tasks in Dependency Order
//!
//! Ferris Order takes a set of tasks with prerequisites and works out the
//! order in which they must be done. When some tasks depend on each other,
//! it groups each set of mutually dependent tasks into a single step and
//! still orders the steps so prerequisites come first.
//!
//! ## Main Components
//!
//! - **Graph**: A label-keyed directed graph and the algorithms over it
//!   (cycle detection, topological sort, Kosaraju's SCC)
//! - **Task File**: Reads tab-separated task records into a graph
//! - **Planner**: Picks a flat order or an order of task groups
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Ordering a Task File
//!
//! ```
//! use ferris_order::planner::TaskPlan;
//! use ferris_order::reports::{HumanReportGenerator, ReportGenerator};
//! use ferris_order::task_file::TaskFile;
//!
//! # fn main() -> miette::Result<()> {
//! let contents = "compile\tconfigure\nconfigure\tcheckout\npackage\tcompile\ttest\ntest\tcompile\n";
//! let task_file = TaskFile::parse("release.tasks", contents)?;
//!
//! let plan = TaskPlan::build(task_file.name(), task_file.graph());
//! assert!(!plan.has_cycles());
//!
//! let report = HumanReportGenerator::new(None).generate_report(&plan)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Working With the Graph Directly
//!
//! ```
//! use ferris_order::graph::LabeledDigraph;
//! use ferris_order::graph::analyzer::{has_cycle, strongly_connected_components};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = LabeledDigraph::new();
//! for task in ["A", "B", "C", "D"] {
//!     graph.add_vertex(task)?;
//! }
//! graph.add_edge("A", "B")?;
//! graph.add_edge("B", "C")?;
//! graph.add_edge("C", "A")?;
//! graph.add_edge("C", "D")?;
//!
//! assert!(has_cycle(&graph));
//!
//! let components = strongly_connected_components(&graph);
//! assert_eq!(components.len(), 2);
//! assert_eq!(components[0].len(), 3);
//! assert_eq!(components[1], vec!["D"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Visualizing the Plan
//!
//! ```
//! use ferris_order::graph::GraphRenderer;
//! use ferris_order::planner::TaskPlan;
//! use ferris_order::task_file::TaskFile;
//!
//! # fn main() -> miette::Result<()> {
//! let task_file = TaskFile::parse("loop.tasks", "B\tA\nA\tB\nC\tB\n")?;
//! let plan = TaskPlan::build(task_file.name(), task_file.graph());
//!
//! let renderer = GraphRenderer::new(true);
//! let mut dot_output = Vec::new();
//! renderer.render_dot(task_file.graph(), &plan, &mut dot_output)?;
//!
//! let dot = String::from_utf8(dot_output).unwrap();
//! assert!(dot.contains("cluster_step_1"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod planner;
pub mod reports;
pub mod task_file;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit with 1, help and version with 0
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    execute_command(cli)
}
