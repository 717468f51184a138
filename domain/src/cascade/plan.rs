//! Ordered candidate list for one cascade run

use crate::core::error::DomainError;
use crate::core::model::Model;

/// Models to try, in priority order (Value Object)
///
/// A caller-supplied override replaces the configured sequence entirely.
/// Order is fixed once built; there is no runtime reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadePlan {
    models: Vec<Model>,
}

impl CascadePlan {
    pub fn new(models: Vec<Model>) -> Result<Self, DomainError> {
        if models.is_empty() {
            return Err(DomainError::NoModels);
        }
        Ok(Self { models })
    }

    /// A plan holding exactly one model.
    pub fn single(model: Model) -> Self {
        Self {
            models: vec![model],
        }
    }

    /// Use `requested` alone when present, otherwise `defaults`.
    pub fn resolve(requested: Option<Model>, defaults: Vec<Model>) -> Result<Self, DomainError> {
        match requested {
            Some(model) => Ok(Self::single(model)),
            None => Self::new(defaults),
        }
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }
}

impl Default for CascadePlan {
    fn default() -> Self {
        Self {
            models: Model::default_cascade(),
        }
    }
}
