//! Task file parsing
//!
//! A task file holds one record per line. Fields are separated by tabs and
//! trimmed; the first field names a task and the remaining fields name its
//! prerequisites. Every prerequisite becomes an edge pointing at the task,
//! so a topological order lists prerequisites first.

use std::path::Path;

use miette::{NamedSource, SourceSpan};

use crate::constants::task_file::FIELD_DELIMITER;
use crate::error::{FerrisOrderError, GraphError, TaskFileError};
use crate::graph::LabeledDigraph;

/// A parsed task file and the graph built from it
#[derive(Debug, Clone)]
pub struct TaskFile {
    name: String,
    graph: LabeledDigraph,
    record_count: usize,
}

impl TaskFile {
    /// Read and parse the task file at `path`
    pub fn load(path: &Path) -> Result<Self, FerrisOrderError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| FerrisOrderError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&path.display().to_string(), &contents)
    }

    /// Parse task records from `contents`
    ///
    /// `name` is used in diagnostics. Blank lines and trailing empty fields
    /// are ignored.
    pub fn parse(name: &str, contents: &str) -> Result<Self, FerrisOrderError> {
        let mut graph = LabeledDigraph::new();
        let mut record_count = 0;
        let mut offset = 0;

        for (line_index, raw_line) in contents.split_inclusive('\n').enumerate() {
            let line_start = offset;
            offset += raw_line.len();

            let line = raw_line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            let record = Record {
                file: name,
                contents,
                line: line_index + 1,
                span: SourceSpan::new(line_start.into(), line.len()),
            };
            record.add_to(&mut graph, line)?;
            record_count += 1;
        }

        Ok(Self {
            name: name.to_string(),
            graph,
            record_count,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> &LabeledDigraph {
        &self.graph
    }

    pub fn into_graph(self) -> LabeledDigraph {
        self.graph
    }

    /// Number of non-blank lines
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

struct Record<'a> {
    file: &'a str,
    contents: &'a str,
    line: usize,
    span: SourceSpan,
}

impl Record<'_> {
    fn add_to(&self, graph: &mut LabeledDigraph, line: &str) -> Result<(), FerrisOrderError> {
        let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }

        if let Some(position) = fields.iter().position(|field| field.is_empty()) {
            return Err(self.error(format!("field {} is empty", position + 1), None));
        }

        for field in &fields {
            if !graph.has_vertex(field).map_err(|e| self.graph_error(e))? {
                graph.add_vertex(field).map_err(|e| self.graph_error(e))?;
            }
        }

        if let Some((task, prerequisites)) = fields.split_first() {
            for prerequisite in prerequisites {
                graph
                    .add_edge(prerequisite, task)
                    .map_err(|e| self.graph_error(e))?;
            }
        }

        Ok(())
    }

    fn graph_error(&self, error: GraphError) -> FerrisOrderError {
        let reason = match &error {
            GraphError::SelfLoop { label } => {
                format!("task '{label}' lists itself as a prerequisite")
            }
            other => other.to_string(),
        };
        self.error(reason, Some(error))
    }

    fn error(&self, reason: String, source: Option<GraphError>) -> FerrisOrderError {
        TaskFileError {
            file: self.file.to_string(),
            line: self.line,
            reason,
            source_code: NamedSource::new(self.file, self.contents.to_string()),
            span: self.span,
            source,
        }
        .into()
    }
}
