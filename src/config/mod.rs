//! # Configuration Module
//!
//! This module provides the validated configuration for a ferris-order run,
//! built from parsed command-line arguments.
//!
//! ## Example
//!
//! ```
//! use ferris_order::cli::OutputFormat;
//! use ferris_order::common::ConfigBuilder;
//! use ferris_order::config::SortConfig;
//!
//! let config = SortConfig::builder()
//!     .with_file("build.tasks".into())
//!     .with_format(OutputFormat::Human)
//!     .with_output(None)
//!     .with_max_steps(None)
//!     .with_error_on_cycles(true)
//!     .with_highlight_groups(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.error_on_cycles);
//! ```

pub mod sort;

pub use sort::SortConfig;
