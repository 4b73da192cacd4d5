//! # Task Graph Module
//!
//! This module holds the graph engine: a directed graph keyed by task
//! labels, the algorithms that order it, and renderers that draw it.
//!
//! ## Components
//!
//! ### Graph Storage
//! - **LabeledDigraph**: Mutable directed graph addressed by string labels,
//!   backed by dense vertex indices and multiset adjacency lists
//!
//! ### Graph Analysis
//! - **analyzer**: Cycle detection, topological sort and Kosaraju's strongly
//!   connected components, all as stateless functions
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders a graph and its plan as DOT or Mermaid,
//!   highlighting groups of mutually dependent tasks
//!
//! ## Example
//!
//! ```
//! use ferris_order::graph::LabeledDigraph;
//! use ferris_order::graph::analyzer::{has_cycle, strongly_connected_components, topological_order};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = LabeledDigraph::new();
//! for task in ["checkout", "configure", "compile"] {
//!     graph.add_vertex(task)?;
//! }
//!
//! // Edges point from a prerequisite to the task that needs it
//! graph.add_edge("checkout", "configure")?;
//! graph.add_edge("configure", "compile")?;
//!
//! assert!(!has_cycle(&graph));
//! assert_eq!(
//!     topological_order(&graph),
//!     vec!["checkout", "configure", "compile"]
//! );
//!
//! // Close the loop and the tasks collapse into one component
//! graph.add_edge("compile", "checkout")?;
//! assert!(has_cycle(&graph));
//! assert_eq!(strongly_connected_components(&graph).len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
mod digraph;
mod renderer;

pub use digraph::LabeledDigraph;
pub use renderer::GraphRenderer;

pub use crate::error::GraphError;
