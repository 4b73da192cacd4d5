//! Sort command executor

use std::io::Write;

use console::{strip_ansi_codes, style};
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::SortConfig;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::planner::TaskPlan;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::task_file::TaskFile;
use crate::utils::string::pluralize;

pub struct SortExecutor;

impl CommandExecutor for SortExecutor {
    type Config = SortConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Lining up tasks from {}...",
            style("🎡").cyan(),
            style(config.file.display()).dim()
        );

        let task_file = TaskFile::load(&config.file)?;
        let graph = task_file.graph();
        eprintln!(
            "  {} Loaded {} {} with {} {}",
            style("→").dim(),
            style(graph.vertex_count()).yellow().bold(),
            pluralize("task", graph.vertex_count()),
            style(graph.edge_count()).yellow().bold(),
            pluralize("prerequisite link", graph.edge_count())
        );

        let plan = TaskPlan::build(task_file.name(), graph);

        let group_count = plan.mutual_groups().count();
        if group_count == 0 {
            eprintln!("{} No cycles detected", style("✓").green().bold());
        } else {
            eprintln!(
                "{} Found {} {} of mutually dependent tasks",
                style("⚠").yellow().bold(),
                style(group_count).red().bold(),
                pluralize("group", group_count)
            );
        }

        // Generate report based on format
        let mut report = Vec::new();
        match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_steps);
                let text = generator
                    .generate_report(&plan)
                    .wrap_err("Failed to generate report")?;
                // Colour follows stdout's terminal, so files get plain text
                if config.output.is_some() {
                    report.extend_from_slice(strip_ansi_codes(&text).as_bytes());
                } else {
                    report.extend_from_slice(text.as_bytes());
                }
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                let text = generator
                    .generate_report(&plan)
                    .wrap_err("Failed to generate report")?;
                report.extend_from_slice(text.as_bytes());
                report.push(b'\n');
            }
            OutputFormat::Dot => {
                GraphRenderer::new(config.highlight_groups)
                    .render_dot(graph, &plan, &mut report)
                    .wrap_err("Failed to render DOT graph")?;
            }
            OutputFormat::Mermaid => {
                GraphRenderer::new(config.highlight_groups)
                    .render_mermaid(graph, &plan, &mut report)
                    .wrap_err("Failed to render Mermaid graph")?;
            }
        }

        match &config.output {
            Some(path) => {
                std::fs::write(path, &report)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to write report to '{}'", path.display()))?;
                eprintln!(
                    "{} Report written to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(&report)
                    .and_then(|()| stdout.flush())
                    .into_diagnostic()
                    .wrap_err("Failed to write report")?;
            }
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && plan.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
