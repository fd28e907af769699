mod rules;
mod validator;

use crate::error::ValidationError;
use crate::types::Integration;
use validator::Validator;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Integration {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_integration(self)
    }
}

pub fn validate_integration(integration: &Integration) -> Result<(), ValidationError> {
    let mut v = Validator::new();
    v.validate_integration(integration);
    v.finish()
}
