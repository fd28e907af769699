use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    Validate {
        path: PathBuf,
        #[command(flatten)]
        format: FormatArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    Inspect {
        path: PathBuf,
        #[command(flatten)]
        format: FormatArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    Execute {
        path: PathBuf,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set_values: Vec<String>,
        // Single-request runs take no integration-level settings.
        #[arg(
            long,
            value_name = "NAME_OR_ID",
            conflicts_with_all = ["mode", "max_parallel", "timeout_ms", "no_retries", "stop_on_first_error"]
        )]
        request: Option<String>,
        #[arg(long, value_name = "N")]
        max_parallel: Option<usize>,
        #[arg(long, value_name = "N")]
        timeout_ms: Option<u64>,
        #[arg(long)]
        no_retries: bool,
        #[arg(long)]
        stop_on_first_error: bool,
        #[command(flatten)]
        format: FormatArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
