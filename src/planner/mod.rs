//! # Task Planning Module
//!
//! This module turns a task graph into the sequence of steps a user has to
//! follow.
//!
//! ## Algorithm
//!
//! The graph is first checked for cycles with a three-color depth-first
//! search. Acyclic graphs get a plain topological sort, one task per step.
//! When some tasks depend on each other, the graph is split into strongly
//! connected components with Kosaraju's algorithm and every component
//! becomes one step. Both paths run in O(V + E).
//!
//! ## Key Components
//!
//! - **TaskPlan**: The ordered steps for one graph, plus summary counts
//! - **TaskOrder**: Either a flat task order or an order of task groups
//!
//! ## Example
//!
//! ```
//! use ferris_order::graph::LabeledDigraph;
//! use ferris_order::planner::TaskPlan;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = LabeledDigraph::new();
//! for task in ["fetch", "compile", "test"] {
//!     graph.add_vertex(task)?;
//! }
//!
//! // compile and test need each other
//! graph.add_edge("fetch", "compile")?;
//! graph.add_edge("compile", "test")?;
//! graph.add_edge("test", "compile")?;
//!
//! let plan = TaskPlan::build("build.tasks", &graph);
//!
//! assert!(plan.has_cycles());
//! assert_eq!(plan.step_count(), 2);
//! assert_eq!(plan.mutual_groups().count(), 1);
//! # Ok(())
//! # }
//! ```

mod planner_impl;

pub use planner_impl::*;
