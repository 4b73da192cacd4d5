//! Configuration constants for ferris-order
//!
//! This module contains the fixed values used throughout the application.
//! Output defaults can be overridden through command-line flags or
//! environment variables.

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Separator between the members of a group of mutually dependent tasks
    pub const GROUP_SEPARATOR: &str = ", ";
}

/// Task file format
pub mod task_file {
    /// Separator between the task and its prerequisites on a line
    pub const FIELD_DELIMITER: char = '\t';
}

/// Graph storage configuration
pub mod graph {
    /// Number of vertex slots reserved by a fresh graph
    pub const INITIAL_VERTEX_CAPACITY: usize = 20;
}
