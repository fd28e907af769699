use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "relay", version, about = "HTTP integration runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Validate { path, format, output } => {
            cmd::validate::validate_cmd(&path, format, output).await
        }
        Command::Inspect { path, format, output } => {
            cmd::inspect::inspect_cmd(&path, format, output).await
        }
        Command::Execute {
            path,
            mode,
            set_values,
            request,
            max_parallel,
            timeout_ms,
            no_retries,
            stop_on_first_error,
            format,
            output,
        } => {
            cmd::execute::execute_cmd(
                &path,
                mode,
                &set_values,
                request.as_deref(),
                max_parallel,
                timeout_ms,
                no_retries,
                stop_on_first_error,
                format,
                output,
            )
            .await
        }
    }
}
