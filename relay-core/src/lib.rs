#![forbid(unsafe_code)]

pub mod error;
pub mod expressions;
pub mod parser;
pub mod types;
pub mod validate;

pub use crate::error::{ParseError, RelayError, ValidationError};
pub use crate::parser::{parse_integration_str, DocumentFormat, ParsedIntegration};
pub use crate::types::Integration;
pub use crate::validate::{validate_integration, Validate};
