use clap::Args;
use evalml_core::{config::Configuration, evaluator::Evaluator};

use crate::command::Command;

use anyhow::{Context, Result};

use clap::Subcommand;

#[derive(Args)]
pub(crate) struct ConfigCheckArgs {
    config: String,
}

#[derive(Args)]
pub(crate) struct ConfigNewArgs {}

#[derive(Subcommand)]
enum ConfigSubCommand {
    /// Check an evaluation configuration for validity, including that it
    /// resolves at least one known metric.
    Check(ConfigCheckArgs),
    /// Emit a full configuration with all defaults.
    New(ConfigNewArgs),
}

#[derive(Args)]
pub(crate) struct ConfigArgs {
    #[command(subcommand)]
    subcommand: ConfigSubCommand,
}

pub(crate) struct ConfigCommand;

impl Command for ConfigCommand {
    type Args = ConfigArgs;
    fn execute(args: &ConfigArgs, _quiet: bool) -> Result<()> {
        match &args.subcommand {
            ConfigSubCommand::Check(args) => {
                let contents = std::fs::read_to_string(&args.config)
                    .with_context(|| format!("Failed to read configuration file {}", args.config))?;
                let parsed = if args.config.ends_with(".yaml") || args.config.ends_with(".yml") {
                    Evaluator::create_from_yaml(&contents)
                } else {
                    Evaluator::create_from_json(&contents)
                };
                let evaluator = parsed.with_context(|| {
                    format!("Failed to parse configuration file {}", args.config)
                })?;
                evaluator.resolve().with_context(|| {
                    format!("Configuration file {} resolves no metrics", args.config)
                })?;
                println!("ok");
                Ok(())
            }
            ConfigSubCommand::New(_args) => {
                let config = Configuration::default();
                println!("{}", serde_json::to_string_pretty(&config).unwrap());
                Ok(())
            }
        }
    }
}
