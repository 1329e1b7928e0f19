use clap::Args;
use evalml_core::metrics::KNOWN_METRICS;

use crate::command::Command;

use anyhow::Result;

#[derive(Args)]
pub(crate) struct ListMetricsArgs {}

pub(crate) struct ListMetricsCommand;

impl Command for ListMetricsCommand {
    type Args = ListMetricsArgs;
    fn execute(_args: &ListMetricsArgs, _quiet: bool) -> Result<()> {
        for kind in KNOWN_METRICS {
            println!("{}", kind.name());
        }
        Ok(())
    }
}
