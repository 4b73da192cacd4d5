//! Sort configuration

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::common::ConfigBuilder;
use crate::error::FerrisOrderError;

/// Configuration for ordering a task file
///
/// This struct contains all options for loading, ordering and reporting a
/// set of tasks.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Task file to read
    pub file: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// File to write the report to (None = stdout)
    pub output: Option<PathBuf>,
    /// Maximum number of steps to report (None = all)
    pub max_steps: Option<usize>,
    /// Whether to exit with error code if some tasks depend on each other
    pub error_on_cycles: bool,
    /// Highlight groups of mutually dependent tasks in graph formats
    pub highlight_groups: bool,
}

impl SortConfig {
    pub fn builder() -> SortConfigBuilder {
        SortConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SortConfigBuilder {
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<Option<PathBuf>>,
    max_steps: Option<Option<usize>>,
    error_on_cycles: Option<bool>,
    highlight_groups: Option<bool>,
}

impl SortConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_highlight_groups(mut self, highlight_groups: bool) -> Self {
        self.highlight_groups = Some(highlight_groups);
        self
    }
}

fn missing(field: &str) -> FerrisOrderError {
    FerrisOrderError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl ConfigBuilder for SortConfigBuilder {
    type Config = SortConfig;

    fn build(self) -> Result<Self::Config, FerrisOrderError> {
        let file = self.file.ok_or_else(|| missing("file"))?;
        if file.as_os_str().is_empty() {
            return Err(FerrisOrderError::ConfigurationError {
                message: "Task file path cannot be empty".to_string(),
            });
        }

        Ok(SortConfig {
            file,
            format: self.format.ok_or_else(|| missing("format"))?,
            output: self.output.ok_or_else(|| missing("output"))?,
            max_steps: self.max_steps.ok_or_else(|| missing("max_steps"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing("error_on_cycles"))?,
            highlight_groups: self
                .highlight_groups
                .ok_or_else(|| missing("highlight_groups"))?,
        })
    }
}

impl TryFrom<Cli> for SortConfig {
    type Error = FerrisOrderError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        SortConfig::builder()
            .with_file(cli.file)
            .with_format(cli.format)
            .with_output(cli.output)
            .with_max_steps(cli.max_steps)
            .with_error_on_cycles(cli.error_on_cycles)
            .with_highlight_groups(!cli.no_highlight)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "ferris-order",
            "jobs.tasks",
            "-f",
            "json",
            "--no-highlight",
        ])
        .unwrap();
        let config = SortConfig::try_from(cli).unwrap();

        assert_eq!(config.file, PathBuf::from("jobs.tasks"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.highlight_groups);
        assert!(!config.error_on_cycles);
        assert_eq!(config.max_steps, None);
    }

    #[test]
    fn test_missing_field() {
        let result = SortConfig::builder()
            .with_file("jobs.tasks".into())
            .with_format(OutputFormat::Human)
            .build();

        match result {
            Err(FerrisOrderError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: output");
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_path_is_rejected() {
        let result = SortConfig::builder()
            .with_file(PathBuf::new())
            .with_format(OutputFormat::Human)
            .with_output(None)
            .with_max_steps(None)
            .with_error_on_cycles(false)
            .with_highlight_groups(true)
            .build();

        assert!(matches!(
            result,
            Err(FerrisOrderError::ConfigurationError { .. })
        ));
    }
}
