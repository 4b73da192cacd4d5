//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::FerrisOrderError;
use crate::planner::TaskPlan;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    task_count: usize,
    dependency_count: usize,
    has_cycles: bool,
    steps: Vec<&'a [String]>,
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, plan: &TaskPlan) -> Result<String, FerrisOrderError> {
        let report = JsonReport {
            source: plan.source(),
            task_count: plan.task_count(),
            dependency_count: plan.dependency_count(),
            has_cycles: plan.has_cycles(),
            steps: plan.steps().collect(),
        };

        serde_json::to_string_pretty(&report).map_err(FerrisOrderError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::graph::LabeledDigraph;

    fn plan_for(vertices: &[&str], edges: &[(&str, &str)]) -> TaskPlan {
        let mut graph = LabeledDigraph::new();
        for vertex in vertices {
            graph.add_vertex(vertex).unwrap();
        }
        for (from, to) in edges {
            graph.add_edge(from, to).unwrap();
        }
        TaskPlan::build("jobs.tasks", &graph)
    }

    fn report_json(plan: &TaskPlan) -> Value {
        let report = JsonReportGenerator::new().generate_report(plan).unwrap();
        serde_json::from_str(&report).unwrap()
    }

    #[test]
    fn test_json_report_acyclic() {
        let plan = plan_for(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);

        assert_eq!(
            report_json(&plan),
            json!({
                "source": "jobs.tasks",
                "task_count": 3,
                "dependency_count": 2,
                "has_cycles": false,
                "steps": [["A"], ["B"], ["C"]],
            })
        );
    }

    #[test]
    fn test_json_report_with_cycles() {
        let plan = plan_for(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")],
        );
        let json = report_json(&plan);

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["task_count"], 4);

        let steps = json["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].as_array().unwrap().len(), 3);
        assert_eq!(steps[1], json!(["D"]));
    }

    #[test]
    fn test_json_report_empty() {
        let json = report_json(&plan_for(&[], &[]));

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["steps"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let plan = plan_for(&["A"], &[]);
        let report = JsonReportGenerator::new().generate_report(&plan).unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }

    #[test]
    fn test_json_report_default_trait() {
        let plan = plan_for(&["A"], &[]);
        let report1 = JsonReportGenerator.generate_report(&plan).unwrap();
        let report2 = JsonReportGenerator::default()
            .generate_report(&plan)
            .unwrap();

        assert_eq!(report1, report2);
    }
}
