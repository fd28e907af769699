use crate::types::Authentication;
use crate::validate::validator::Validator;

pub(crate) fn validate_authentication(v: &mut Validator, auth: &Authentication, path: &str) {
    match auth {
        Authentication::BearerToken { token } if token.trim().is_empty() => {
            v.push(format!("{path}.token"), "must not be empty");
        }
        Authentication::BasicAuth { username, .. } if username.trim().is_empty() => {
            v.push(format!("{path}.username"), "must not be empty");
        }
        Authentication::ApiKey { key, .. } if key.trim().is_empty() => {
            v.push(format!("{path}.key"), "must not be empty");
        }
        _ => {}
    }
}
