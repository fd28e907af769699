/// How credentials reach the placeholder map before an execution starts.
///
/// Internally tagged so that a document states exactly one scheme; the
/// schemes carry only the fields they need.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Authentication {
    None,
    /// A static token, injected as the `token` placeholder.
    BearerToken { token: String },
    /// Token is fetched from an external provider at execution time.
    OAuth2,
    /// Injected as the `basicAuth` placeholder, already base64-encoded.
    BasicAuth { username: String, password: String },
    /// Injected under the configured placeholder key.
    ApiKey { key: String, value: String },
}

impl Authentication {
    pub fn scheme(&self) -> &'static str {
        match self {
            Authentication::None => "None",
            Authentication::BearerToken { .. } => "BearerToken",
            Authentication::OAuth2 => "OAuth2",
            Authentication::BasicAuth { .. } => "BasicAuth",
            Authentication::ApiKey { .. } => "ApiKey",
        }
    }
}
