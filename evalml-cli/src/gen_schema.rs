use clap::Args;
use evalml_core::config;

use crate::command::Command;

use anyhow::Result;

#[derive(Args)]
pub(crate) struct GenSchemaArgs {}

pub(crate) struct GenSchemaCommand;

impl Command for GenSchemaCommand {
    type Args = GenSchemaArgs;
    fn execute(_args: &GenSchemaArgs, _quiet: bool) -> Result<()> {
        let schema = config::config_schema();
        println!("{}", serde_json::to_string_pretty(&schema).unwrap());
        Ok(())
    }
}
