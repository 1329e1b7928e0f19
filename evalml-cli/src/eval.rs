use clap::{Args, ValueHint};
use evalml_core::{
    evaluator::Evaluator, parsers, ClassLabel, ClassificationReport, MetricValue,
};
use prettytable::{format, row, Table};

use crate::{command::Command, DataFormat, MetricsArg};

use anyhow::{Context, Result};

#[derive(Args)]
pub(crate) struct EvalArgs {
    /// File containing predicted labels
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    predictions: String,

    /// File containing true labels
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    truth: String,

    #[arg(long)]
    #[arg(default_value = "text")]
    data_format: DataFormat,

    #[command(flatten)]
    metrics: MetricsArg,

    /// Emit results as pretty-printed JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

pub(crate) struct EvalCommand;

fn read_labels(path: &str, format: DataFormat) -> Result<Vec<ClassLabel>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read label file {path}"))?;
    let labels = match format {
        DataFormat::Text => parsers::parse_labels(&contents),
        DataFormat::Json => parsers::parse_labels_json(&contents),
    };
    labels.with_context(|| format!("Failed to parse label file {path}"))
}

fn report_table(report: &ClassificationReport) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.add_row(row!["", "precision", "recall", "f1-score", "support"]);
    for (class, metrics) in &report.classes {
        table.add_row(row![
            class,
            format!("{:.4}", metrics.precision),
            format!("{:.4}", metrics.recall),
            format!("{:.4}", metrics.f1_score),
            metrics.support
        ]);
    }
    table.add_row(row![
        "accuracy",
        "",
        "",
        format!("{:.4}", report.accuracy),
        report.macro_avg.support
    ]);
    for (name, metrics) in [
        ("macro avg", &report.macro_avg),
        ("weighted avg", &report.weighted_avg),
    ] {
        table.add_row(row![
            name,
            format!("{:.4}", metrics.precision),
            format!("{:.4}", metrics.recall),
            format!("{:.4}", metrics.f1_score),
            metrics.support
        ]);
    }
    table
}

impl Command for EvalCommand {
    type Args = EvalArgs;
    fn execute(args: &EvalArgs, quiet: bool) -> Result<()> {
        let evaluator = match (&args.metrics.config, &args.metrics.metrics) {
            // Loading from a config file
            (Some(config_file), None) => {
                let contents = std::fs::read_to_string(config_file)
                    .with_context(|| format!("Failed to read configuration file {config_file}"))?;
                let parsed = if config_file.ends_with(".yaml") || config_file.ends_with(".yml") {
                    Evaluator::create_from_yaml(&contents)
                } else {
                    Evaluator::create_from_json(&contents)
                };
                parsed
                    .with_context(|| format!("Failed to parse configuration file {config_file}"))?
            }
            // Metric names given directly
            (None, Some(metrics)) => Evaluator::new(metrics.clone()),
            (None, None) => Evaluator::default(),
            _ => unreachable!(),
        };

        let predictions = read_labels(&args.predictions, args.data_format)?;
        let truth = read_labels(&args.truth, args.data_format)?;

        if !quiet {
            eprintln!("Read {} examples", predictions.len());
        }

        let results = evaluator.compute(&predictions, &truth)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        let mut summary = Table::new();
        summary.set_format(*format::consts::FORMAT_CLEAN);
        for (kind, value) in &results {
            if let MetricValue::Float(value) = value {
                summary.add_row(row![kind.name(), format!("{value:.4}")]);
            }
        }
        if summary.len() > 0 {
            summary.printstd();
        }
        for (kind, value) in &results {
            if let MetricValue::Report(report) = value {
                println!("{}", kind.name());
                report_table(report).printstd();
            }
        }
        Ok(())
    }
}
