use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised by [`LabeledDigraph`](crate::graph::LabeledDigraph)
/// operations.
///
/// Every failing operation leaves the graph exactly as it was.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex label cannot be empty")]
    #[diagnostic(
        code(ferris_order::graph::invalid_label),
        help("Every task needs a non-empty name")
    )]
    InvalidLabel,

    #[error("Vertex '{label}' already exists")]
    #[diagnostic(
        code(ferris_order::graph::duplicate_vertex),
        help("Check with has_vertex() before inserting a label a second time")
    )]
    DuplicateVertex { label: String },

    #[error("Vertex '{label}' does not exist")]
    #[diagnostic(
        code(ferris_order::graph::unknown_vertex),
        help("Add the vertex with add_vertex() before referring to it")
    )]
    UnknownVertex { label: String },

    #[error("Vertex '{label}' cannot have an edge to itself")]
    #[diagnostic(
        code(ferris_order::graph::self_loop),
        help("A task cannot be its own prerequisite")
    )]
    SelfLoop { label: String },
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid task record on line {line} of '{file}': {reason}")]
#[diagnostic(
    code(ferris_order::task_file_error),
    help("Each line is a task followed by its prerequisites, separated by tabs")
)]
pub struct TaskFileError {
    pub file: String,
    pub line: usize,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("in this record")]
    pub span: SourceSpan,
    #[source]
    pub source: Option<GraphError>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum FerrisOrderError {
    #[error("Couldn't open file '{path}'")]
    #[diagnostic(
        code(ferris_order::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TaskFileError(Box<TaskFileError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(ferris_order::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(ferris_order::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(ferris_order::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(ferris_order::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl From<TaskFileError> for FerrisOrderError {
    fn from(error: TaskFileError) -> Self {
        FerrisOrderError::TaskFileError(Box::new(error))
    }
}
