//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::constants::output::GROUP_SEPARATOR;
use crate::error::FerrisOrderError;
use crate::planner::TaskPlan;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_steps: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_steps: Option<usize>) -> Self {
        Self { max_steps }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, plan: &TaskPlan) -> Result<String, FerrisOrderError> {
        let mut output = String::new();

        let summary = if plan.has_cycles() {
            "some of which are mutually dependent"
        } else {
            "with no cycles"
        };
        writeln!(
            output,
            "The file \"{}\" contains {} {}, {}. You must:",
            style(plan.source()).bold(),
            style(plan.task_count()).yellow().bold(),
            pluralize("task", plan.task_count()),
            summary
        )?;

        let total_steps = plan.step_count();
        let limit = self.max_steps.unwrap_or(total_steps);

        for (i, step) in plan.steps().take(limit).enumerate() {
            let line = step.join(GROUP_SEPARATOR);
            if step.len() > 1 {
                writeln!(output, "  {}. {}", i + 1, style(line).yellow())?;
            } else {
                writeln!(output, "  {}. {}", i + 1, line)?;
            }
        }

        if limit < total_steps {
            writeln!(
                output,
                "\n{} Showing {} of {} steps. Use --max-steps to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_steps).yellow()
            )?;
        }

        Ok(output)
    }
}
