use crate::graph::LabeledDigraph;
use crate::graph::analyzer::{has_cycle, strongly_connected_components, topological_order};

/// The order in which tasks have to be carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOrder {
    /// No cycles: one task per step
    Sequential(Vec<String>),
    /// Some tasks depend on each other: one group of tasks per step
    Grouped(Vec<Vec<String>>),
}

/// Ordered steps computed from a task graph
#[derive(Debug, Clone)]
pub struct TaskPlan {
    source: String,
    task_count: usize,
    dependency_count: usize,
    order: TaskOrder,
}

impl TaskPlan {
    /// Analyze `graph` and build the plan for it
    ///
    /// `source` names where the tasks came from and is only used in
    /// reports.
    pub fn build(source: &str, graph: &LabeledDigraph) -> Self {
        let order = if has_cycle(graph) {
            TaskOrder::Grouped(
                strongly_connected_components(graph)
                    .into_iter()
                    .map(|component| component.into_iter().map(str::to_string).collect())
                    .collect(),
            )
        } else {
            TaskOrder::Sequential(
                topological_order(graph)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            )
        };

        Self {
            source: source.to_string(),
            task_count: graph.vertex_count(),
            dependency_count: graph.edge_count(),
            order,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn task_count(&self) -> usize {
        self.task_count
    }

    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    pub fn order(&self) -> &TaskOrder {
        &self.order
    }

    /// Whether some tasks were found to depend on each other
    pub fn has_cycles(&self) -> bool {
        matches!(self.order, TaskOrder::Grouped(_))
    }

    pub fn step_count(&self) -> usize {
        match &self.order {
            TaskOrder::Sequential(tasks) => tasks.len(),
            TaskOrder::Grouped(groups) => groups.len(),
        }
    }

    /// Each step as a slice of task names
    ///
    /// Sequential plans yield one-element slices.
    pub fn steps(&self) -> Box<dyn Iterator<Item = &[String]> + '_> {
        match &self.order {
            TaskOrder::Sequential(tasks) => Box::new(tasks.chunks(1)),
            TaskOrder::Grouped(groups) => Box::new(groups.iter().map(Vec::as_slice)),
        }
    }

    /// Steps that contain more than one task
    pub fn mutual_groups(&self) -> impl Iterator<Item = &[String]> {
        self.steps().filter(|step| step.len() > 1)
    }
}
