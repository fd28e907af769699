use std::path::Path;

use relay_core::{parse_integration_str, Validate};
use serde::Serialize;

use crate::args::FormatArgs;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    format: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

pub async fn validate_cmd(path: &Path, format: FormatArgs, output: OutputArgs) -> i32 {
    let content = match std::fs::read_to_string(path) {
        Ok(v) => v,
        Err(e) => {
            print_error(
                output.output,
                output.quiet,
                &format!("failed to read {}: {e}", path.display()),
            );
            return exit_codes::VALIDATION_FAILED;
        }
    };

    let parsed = match parse_integration_str(&content, format.format.into()) {
        Ok(p) => p,
        Err(e) => {
            print_error(output.output, output.quiet, &format!("{e}"));
            return exit_codes::VALIDATION_FAILED;
        }
    };

    match parsed.integration.validate() {
        Ok(()) => {
            let result = ValidateResult {
                valid: true,
                format: format!("{:?}", parsed.format),
                errors: vec![],
            };
            if output.output == OutputFormat::Text && !output.quiet {
                println!("ok: valid integration document ({:?})", parsed.format);
            } else {
                print_result(output.output, output.quiet, &result);
            }
            exit_codes::SUCCESS
        }
        Err(err) => {
            let errors: Vec<String> = err
                .violations
                .iter()
                .map(|v| format!("{}: {}", v.path, v.message))
                .collect();
            let result = ValidateResult {
                valid: false,
                format: format!("{:?}", parsed.format),
                errors: errors.clone(),
            };
            if output.output == OutputFormat::Text && !output.quiet {
                eprintln!("error: validation failed");
                for e in &errors {
                    eprintln!("- {e}");
                }
            } else {
                print_result(output.output, output.quiet, &result);
            }
            exit_codes::VALIDATION_FAILED
        }
    }
}
