use std::collections::HashMap;
use std::io::Write;

use miette::Result;

use crate::error::{FerrisOrderError, GraphError};
use crate::graph::LabeledDigraph;
use crate::planner::TaskPlan;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const GROUP_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const GROUP_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const GROUP_EDGE: &str = "#FF6500"; // Deep orange
    pub const GROUP_BG: &str = "#FAFAFA"; // Off-white background
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(FerrisOrderError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(FerrisOrderError::from)
    };
}

/// Renders a task graph with its plan as Graphviz DOT or Mermaid
///
/// Tasks are emitted in plan order. Groups of mutually dependent tasks are
/// drawn as clusters, and with highlighting enabled their nodes and
/// internal edges are coloured.
pub struct GraphRenderer {
    highlight_groups: bool,
}

impl GraphRenderer {
    pub fn new(highlight_groups: bool) -> Self {
        Self { highlight_groups }
    }

    pub fn render_dot(
        &self,
        graph: &LabeledDigraph,
        plan: &TaskPlan,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph task_order {{")?;
        if graph.is_empty() {
            writeln_out!(output, "    // no tasks to visualize")?;
            writeln_out!(output, "}}")?;
            return Ok(());
        }

        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for (step_index, step) in plan.steps().enumerate() {
            if step.len() > 1 {
                writeln_out!(output, "    subgraph cluster_step_{} {{", step_index + 1)?;
                writeln_out!(
                    output,
                    r#"        label="Step {} (mutually dependent)";"#,
                    step_index + 1
                )?;
                writeln_out!(
                    output,
                    r#"        style=filled; fillcolor="{}"; color="{}";"#,
                    colors::GROUP_BG,
                    colors::GROUP_NODE_STROKE
                )?;
                for task in step {
                    self.write_dot_node(output, task, true, "        ")?;
                }
                writeln_out!(output, "    }}")?;
            } else {
                for task in step {
                    self.write_dot_node(output, task, false, "    ")?;
                }
            }
        }

        writeln_out!(output)?;

        let groups = group_membership(plan);
        for (from, to) in graph.edges() {
            let (color, width) = if self.highlight_groups && same_group(&groups, from, to) {
                (colors::GROUP_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                r#"    "{}" -> "{}" [color="{}", penwidth={}];"#,
                dot_escape(from),
                dot_escape(to),
                color,
                width
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &LabeledDigraph,
        plan: &TaskPlan,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;
        if graph.is_empty() {
            writeln_out!(output, "    %% no tasks to visualize")?;
            return Ok(());
        }

        let mut grouped_ids = Vec::new();
        for (step_index, step) in plan.steps().enumerate() {
            if step.len() > 1 {
                writeln_out!(
                    output,
                    "    subgraph step_{}[\"Step {} (mutually dependent)\"]",
                    step_index + 1,
                    step_index + 1
                )?;
                for task in step {
                    let id = mermaid_id(graph, task)?;
                    writeln_out!(output, "        {}[\"{}\"]", id, mermaid_escape(task))?;
                    grouped_ids.push(id);
                }
                writeln_out!(output, "    end")?;
            } else {
                for task in step {
                    writeln_out!(
                        output,
                        "    {}[\"{}\"]",
                        mermaid_id(graph, task)?,
                        mermaid_escape(task)
                    )?;
                }
            }
        }

        writeln_out!(output)?;

        let groups = group_membership(plan);
        let mut highlighted_links = Vec::new();
        for (link_index, (from, to)) in graph.edges().enumerate() {
            writeln_out!(
                output,
                "    {} --> {}",
                mermaid_id(graph, from)?,
                mermaid_id(graph, to)?
            )?;
            if self.highlight_groups && same_group(&groups, from, to) {
                highlighted_links.push(link_index);
            }
        }

        if self.highlight_groups {
            for link_index in highlighted_links {
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:3px",
                    link_index,
                    colors::GROUP_EDGE
                )?;
            }

            writeln_out!(output)?;
            writeln_out!(
                output,
                "    classDef default fill:{},stroke:{},stroke-width:2px",
                colors::NORMAL_NODE_FILL,
                colors::NORMAL_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "    classDef grouped fill:{},stroke:{},stroke-width:3px",
                colors::GROUP_NODE_FILL,
                colors::GROUP_NODE_STROKE
            )?;
            if !grouped_ids.is_empty() {
                writeln_out!(output, "    class {} grouped", grouped_ids.join(","))?;
            }
        }

        Ok(())
    }

    fn write_dot_node(
        &self,
        output: &mut dyn Write,
        task: &str,
        grouped: bool,
        indent: &str,
    ) -> Result<()> {
        let (fill_color, stroke_color) = if grouped && self.highlight_groups {
            (colors::GROUP_NODE_FILL, colors::GROUP_NODE_STROKE)
        } else {
            (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
        };

        writeln_out!(
            output,
            r#"{}"{}" [style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
            indent,
            dot_escape(task),
            fill_color,
            stroke_color
        )?;
        Ok(())
    }
}

/// Map every task in a multi-task step to that step's index
fn group_membership(plan: &TaskPlan) -> HashMap<&str, usize> {
    plan.steps()
        .enumerate()
        .filter(|(_, step)| step.len() > 1)
        .flat_map(|(index, step)| step.iter().map(move |task| (task.as_str(), index)))
        .collect()
}

fn same_group(groups: &HashMap<&str, usize>, from: &str, to: &str) -> bool {
    matches!((groups.get(from), groups.get(to)), (Some(a), Some(b)) if a == b)
}

/// Node id for a task; labels can contain anything, so ids come from
/// vertex indices
fn mermaid_id(graph: &LabeledDigraph, task: &str) -> Result<String, GraphError> {
    graph
        .index_of(task)
        .map(|index| format!("t{index}"))
        .ok_or_else(|| GraphError::UnknownVertex {
            label: task.to_string(),
        })
}

fn mermaid_escape(task: &str) -> String {
    task.replace('"', "#quot;")
}

fn dot_escape(task: &str) -> String {
    task.replace('\\', "\\\\").replace('"', "\\\"")
}
