use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ferris-order",
    about = "🎡 Line up tasks in dependency order",
    long_about = "ferris-order reads a task file where every line names a task followed by its \
                  prerequisites, separated by tabs, and prints the order in which the tasks \
                  must be done. When tasks depend on each other, it groups every set of \
                  mutually dependent tasks into a single step using Kosaraju's strongly \
                  connected components algorithm, and orders the steps so prerequisites still \
                  come first.",
    version
)]
pub struct Cli {
    /// Task file to order
    #[arg(value_name = "TASK_FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "FERRIS_ORDER_FORMAT"
    )]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "FERRIS_ORDER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Maximum number of steps to display (shows all by default)
    #[arg(long, env = "FERRIS_ORDER_MAX_STEPS")]
    pub max_steps: Option<usize>,

    /// Exit with error code if some tasks depend on each other
    #[arg(long, env = "FERRIS_ORDER_ERROR_ON_CYCLES")]
    pub error_on_cycles: bool,

    /// Don't highlight groups of mutually dependent tasks in graph formats
    #[arg(long)]
    pub no_highlight: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Dot,
    Mermaid,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ferris-order", "build.tasks"]).unwrap();

        assert_eq!(cli.file, PathBuf::from("build.tasks"));
        assert_eq!(cli.format, OutputFormat::Human);
        assert_eq!(cli.output, None);
        assert_eq!(cli.max_steps, None);
        assert!(!cli.error_on_cycles);
        assert!(!cli.no_highlight);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "ferris-order",
            "build.tasks",
            "--format",
            "mermaid",
            "--output",
            "plan.mmd",
            "--max-steps",
            "5",
            "--error-on-cycles",
            "--no-highlight",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Mermaid);
        assert_eq!(cli.output, Some(PathBuf::from("plan.mmd")));
        assert_eq!(cli.max_steps, Some(5));
        assert!(cli.error_on_cycles);
        assert!(cli.no_highlight);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Cli::try_parse_from(["ferris-order"]).is_err());
    }
}
