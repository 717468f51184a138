//! API key resolution.
//!
//! Priority: explicit `backend.api_key` from config, then the configured
//! primary env var (default `GEMINI_API_KEY`), then the legacy `GEMINIAPIKEY`.
//! Empty values count as unset.

use thiserror::Error;

/// Legacy spelling still accepted as a fallback.
pub const FALLBACK_API_KEY_ENV: &str = "GEMINIAPIKEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{0} not set in environment.")]
    Missing(String),
}

/// Backend API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Resolves the API key from config and process environment.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    explicit: Option<ApiKey>,
    env_var: String,
}

impl CredentialResolver {
    pub fn new(explicit: Option<String>, env_var: impl Into<String>) -> Self {
        Self {
            explicit: explicit
                .filter(|k| !k.trim().is_empty())
                .map(ApiKey::new),
            env_var: env_var.into(),
        }
    }

    /// Name reported when no key is found.
    pub fn primary_env_var(&self) -> &str {
        &self.env_var
    }

    pub fn resolve(&self) -> Result<ApiKey, CredentialError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` instead of the process environment.
    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ApiKey, CredentialError> {
        if let Some(key) = &self.explicit {
            return Ok(key.clone());
        }
        [self.env_var.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .map(|value| ApiKey::new(value.trim()))
            .ok_or_else(|| CredentialError::Missing(self.env_var.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_primary_env_var_wins() {
        let resolver = CredentialResolver::new(None, "GEMINI_API_KEY");
        let key = resolver
            .resolve_with(env(&[("GEMINI_API_KEY", "primary"), ("GEMINIAPIKEY", "legacy")]))
            .unwrap();
        assert_eq!(key.expose(), "primary");
    }

    #[test]
    fn test_falls_back_to_legacy_name() {
        let resolver = CredentialResolver::new(None, "GEMINI_API_KEY");
        let key = resolver
            .resolve_with(env(&[("GEMINI_API_KEY", "  "), ("GEMINIAPIKEY", "legacy")]))
            .unwrap();
        assert_eq!(key.expose(), "legacy");
    }

    #[test]
    fn test_explicit_key_takes_precedence() {
        let resolver = CredentialResolver::new(Some("from-config".to_string()), "GEMINI_API_KEY");
        let key = resolver
            .resolve_with(env(&[("GEMINI_API_KEY", "primary")]))
            .unwrap();
        assert_eq!(key.expose(), "from-config");
    }

    #[test]
    fn test_missing_key_message() {
        let resolver = CredentialResolver::new(Some(String::new()), "GEMINI_API_KEY");
        let err = resolver.resolve_with(env(&[])).unwrap_err();
        assert_eq!(err.to_string(), "GEMINI_API_KEY not set in environment.");
    }

    #[test]
    fn test_debug_redacts_key() {
        assert_eq!(format!("{:?}", ApiKey::new("secret")), "ApiKey(***)");
    }
}
