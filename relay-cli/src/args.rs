use clap::Args;

use relay_core::types::ExecutionMode;
use relay_core::DocumentFormat;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct FormatArgs {
    #[arg(long, value_enum, default_value_t = FormatArg::Auto, global = true)]
    pub format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
    Auto,
}

impl From<FormatArg> for DocumentFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Yaml => DocumentFormat::Yaml,
            FormatArg::Auto => DocumentFormat::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    Sequential,
    Parallel,
    Conditional,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => ExecutionMode::Sequential,
            ModeArg::Parallel => ExecutionMode::Parallel,
            ModeArg::Conditional => ExecutionMode::Conditional,
        }
    }
}
