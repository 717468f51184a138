//! Model value object naming one backend endpoint variant

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative model identifier (Value Object)
///
/// Known Gemini variants get their own variant; anything else is carried
/// verbatim as [`Model::Custom`]. The identifier ends up in the request path,
/// so parsing rejects empty names and path/query delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini25Flash,
    Gemini25Pro,
    Gemini20Flash,
    Gemini20FlashLite,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini20FlashLite => "gemini-2.0-flash-lite",
            Model::Custom(s) => s,
        }
    }

    /// Default cascade priority, most capable-and-cheap first.
    pub fn default_cascade() -> Vec<Model> {
        vec![
            Model::Gemini25Flash,
            Model::Gemini25Pro,
            Model::Gemini20Flash,
            Model::Gemini20FlashLite,
        ]
    }

    /// Returns true for one of the built-in Gemini variants.
    pub fn is_known(&self) -> bool {
        !matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the head of the default cascade (gemini-2.5-flash)
    fn default() -> Self {
        Model::Gemini25Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidModel("model name is empty".to_string()));
        }
        if s.chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '&'))
        {
            return Err(DomainError::InvalidModel(s.to_string()));
        }
        Ok(match s {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.0-flash-lite" => Model::Gemini20FlashLite,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
