use std::collections::HashMap;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use relay_core::types::{Authentication, Integration};

/// Source of OAuth2 access tokens.
///
/// The engine does not run token flows itself; a provider hands it a
/// token that is currently valid for the integration, or `None` if it
/// has nothing to offer.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn valid_access_token(&self, integration_id: &str) -> Option<String>;
}

/// Provider that never has a token.
pub struct NoTokenProvider;

#[async_trait]
impl TokenProvider for NoTokenProvider {
    async fn valid_access_token(&self, _integration_id: &str) -> Option<String> {
        None
    }
}

/// Folds the integration's authentication scheme into the placeholder
/// map before any request runs. Documents reference the injected values
/// through the usual `{{token}}`, `{{basicAuth}}` or api-key templates.
pub(crate) async fn apply_authentication(
    integration: &Integration,
    tokens: &dyn TokenProvider,
    placeholders: &mut HashMap<String, String>,
) {
    match &integration.authentication {
        Some(Authentication::BearerToken { token }) => {
            if !token.is_empty() {
                placeholders.insert("token".to_string(), token.clone());
            }
        }
        Some(Authentication::OAuth2) => {
            if let Some(token) = tokens.valid_access_token(&integration.id).await {
                if !token.is_empty() {
                    placeholders.insert("token".to_string(), token);
                }
            }
        }
        Some(Authentication::BasicAuth { username, password }) => {
            let credentials = STANDARD.encode(format!("{username}:{password}"));
            placeholders.insert("basicAuth".to_string(), format!("Basic {credentials}"));
        }
        Some(Authentication::ApiKey { key, value }) => {
            placeholders.insert(key.clone(), value.clone());
        }
        Some(Authentication::None) | None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedToken(&'static str);

    #[async_trait]
    impl TokenProvider for FixedToken {
        async fn valid_access_token(&self, _integration_id: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn integration_with(auth: Option<Authentication>) -> Integration {
        Integration {
            id: "int-1".to_string(),
            name: "test".to_string(),
            description: None,
            execution_mode: Default::default(),
            authentication: auth,
            requests: Vec::new(),
        }
    }

    #[tokio::test]
    async fn bearer_token_lands_under_token() {
        let integration = integration_with(Some(Authentication::BearerToken {
            token: "abc123".to_string(),
        }));
        let mut placeholders = HashMap::new();
        apply_authentication(&integration, &NoTokenProvider, &mut placeholders).await;
        assert_eq!(placeholders.get("token").map(String::as_str), Some("abc123"));
    }

    #[tokio::test]
    async fn empty_bearer_token_injects_nothing() {
        let integration = integration_with(Some(Authentication::BearerToken {
            token: String::new(),
        }));
        let mut placeholders = HashMap::new();
        apply_authentication(&integration, &NoTokenProvider, &mut placeholders).await;
        assert!(placeholders.is_empty());
    }

    #[tokio::test]
    async fn oauth_asks_the_provider() {
        let integration = integration_with(Some(Authentication::OAuth2));
        let mut placeholders = HashMap::new();
        apply_authentication(&integration, &FixedToken("provider-token"), &mut placeholders).await;
        assert_eq!(
            placeholders.get("token").map(String::as_str),
            Some("provider-token")
        );
    }

    #[tokio::test]
    async fn oauth_without_a_token_injects_nothing() {
        let integration = integration_with(Some(Authentication::OAuth2));
        let mut placeholders = HashMap::new();
        apply_authentication(&integration, &NoTokenProvider, &mut placeholders).await;
        assert!(placeholders.is_empty());
    }

    #[tokio::test]
    async fn basic_auth_encodes_the_credentials() {
        let integration = integration_with(Some(Authentication::BasicAuth {
            username: "user".to_string(),
            password: "pass".to_string(),
        }));
        let mut placeholders = HashMap::new();
        apply_authentication(&integration, &NoTokenProvider, &mut placeholders).await;
        // base64("user:pass")
        assert_eq!(
            placeholders.get("basicAuth").map(String::as_str),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[tokio::test]
    async fn api_key_lands_under_its_own_key() {
        let integration = integration_with(Some(Authentication::ApiKey {
            key: "x-api-key".to_string(),
            value: "secret".to_string(),
        }));
        let mut placeholders = HashMap::new();
        apply_authentication(&integration, &NoTokenProvider, &mut placeholders).await;
        assert_eq!(placeholders.get("x-api-key").map(String::as_str), Some("secret"));
    }

    #[tokio::test]
    async fn no_authentication_leaves_the_map_alone() {
        let integration = integration_with(None);
        let mut placeholders = HashMap::from([("k".to_string(), "v".to_string())]);
        apply_authentication(&integration, &NoTokenProvider, &mut placeholders).await;
        assert_eq!(placeholders.len(), 1);
    }
}
