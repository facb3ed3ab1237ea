//! Core error types for Records Admin
//!
//! Field-level validation errors and the error type returned by
//! collaborators such as the user repository.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::config::ConfigError;
use crate::traits::Id;

/// Core error type for all Records Admin operations
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: Id },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid field {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AdminError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::NotFound { .. } => "not_found",
            AdminError::Validation(_) => "validation_failed",
            AdminError::InvalidField { .. } => "invalid_field",
            AdminError::Storage(_) => "storage_error",
            AdminError::Config(_) => "configuration_error",
            AdminError::Internal(_) => "internal_error",
        }
    }
}

/// Validation errors collection
///
/// Maps a field name to a single human-readable message. A field that is
/// absent from the map is valid.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first message recorded for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Drop the error for `field`, returning the message if there was one
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.errors.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there is an error for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get the error message for a specific field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Field names that currently carry an error, in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other.errors {
            self.add(field, message);
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect()
    }
}
