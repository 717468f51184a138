//! Cascade configuration from TOML (`[cascade]` section)

use relay_application::CascadeParams;
use relay_domain::{ConfigIssue, ConfigIssueCode, DomainError, Model};
use serde::{Deserialize, Serialize};

/// Default model priority for the cascade
///
/// # Example
///
/// ```toml
/// [cascade]
/// models = ["gemini-2.5-flash", "gemini-2.5-pro", "gemini-2.0-flash", "gemini-2.0-flash-lite"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCascadeConfig {
    /// Model names in priority order; unset means the built-in cascade.
    pub models: Option<Vec<String>>,
}

impl FileCascadeConfig {
    /// Parse the model list, collecting issues for unusable names.
    ///
    /// Invalid names are dropped; if nothing usable remains the built-in
    /// cascade is returned.
    pub fn parse_models(&self) -> (Vec<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let Some(names) = &self.models else {
            return (Model::default_cascade(), issues);
        };

        let mut models = Vec::new();
        for name in names {
            match name.parse::<Model>() {
                Ok(model) => models.push(model),
                Err(DomainError::InvalidModel(_)) if name.trim().is_empty() => {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::EmptyModelName {
                            field: "cascade.models".to_string(),
                        },
                        "cascade.models: model name cannot be empty",
                    ));
                }
                Err(_) => {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::InvalidModelName {
                            field: "cascade.models".to_string(),
                            value: name.clone(),
                        },
                        format!("cascade.models: '{}' is not a valid model name", name),
                    ));
                }
            }
        }

        if models.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelList {
                    field: "cascade.models".to_string(),
                },
                "cascade.models: no usable models, using the built-in cascade",
            ));
            return (Model::default_cascade(), issues);
        }

        (models, issues)
    }

    pub fn to_params(&self) -> (CascadeParams, Vec<ConfigIssue>) {
        let (models, issues) = self.parse_models();
        (CascadeParams::default().with_models(models), issues)
    }
}
