use crate::error::ParseError;
use crate::types::Integration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedIntegration {
    pub integration: Integration,
    pub format: DocumentFormat,
}

pub fn parse_integration_str(
    input: &str,
    format: DocumentFormat,
) -> Result<ParsedIntegration, ParseError> {
    match format {
        DocumentFormat::Json => Ok(ParsedIntegration {
            integration: serde_json::from_str::<Integration>(input)?,
            format,
        }),
        DocumentFormat::Yaml => Ok(ParsedIntegration {
            integration: serde_yaml::from_str::<Integration>(input)?,
            format,
        }),
        DocumentFormat::Auto => parse_integration_auto(input),
    }
}

fn parse_integration_auto(input: &str) -> Result<ParsedIntegration, ParseError> {
    // Heuristic: JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<Integration>(input) {
            Ok(integration) => Ok(ParsedIntegration {
                integration,
                format: DocumentFormat::Json,
            }),
            Err(e) => match serde_yaml::from_str::<Integration>(input) {
                Ok(integration) => Ok(ParsedIntegration {
                    integration,
                    format: DocumentFormat::Yaml,
                }),
                // Report the JSON error; that is what the input looked like.
                Err(_) => Err(ParseError::Json(e)),
            },
        };
    }

    match serde_yaml::from_str::<Integration>(input) {
        Ok(integration) => Ok(ParsedIntegration {
            integration,
            format: DocumentFormat::Yaml,
        }),
        Err(e) => {
            if let Ok(integration) = serde_json::from_str::<Integration>(input) {
                return Ok(ParsedIntegration {
                    integration,
                    format: DocumentFormat::Json,
                });
            }
            Err(ParseError::Yaml(e))
        }
    }
}
