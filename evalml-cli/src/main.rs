use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::command::Command;

mod command;
mod config;
mod eval;
mod gen_completions;
mod gen_schema;
mod list_metrics;

#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Silence all output
    #[arg(long, default_value = "false")]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum DataFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate predictions against true labels
    Eval(eval::EvalArgs),
    /// Check or generate an evaluation config
    Config(config::ConfigArgs),
    /// List supported metrics
    ListMetrics(list_metrics::ListMetricsArgs),
    /// Generate shell completions
    GenCompletions(gen_completions::GenCompletionsArgs),
    /// Generate JSON schema for configuration
    GenSchema(gen_schema::GenSchemaArgs),
}

#[derive(Args)]
#[group(required = false, multiple = false)]
struct MetricsArg {
    /// Metrics configuration file (json or yaml)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<String>,

    /// Metric names to compute
    #[arg(short, long, num_args = 1..)]
    metrics: Option<Vec<String>>,
}

fn main() {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Eval(args) => {
            eval::EvalCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::Config(args) => {
            config::ConfigCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::ListMetrics(args) => {
            list_metrics::ListMetricsCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::GenCompletions(args) => {
            gen_completions::GenCompletionsCommand::execute(args, cli.quiet).unwrap();
        }
        Commands::GenSchema(args) => {
            gen_schema::GenSchemaCommand::execute(args, cli.quiet).unwrap();
        }
    }
}
