//! Configuration validation for jsondiff-tools.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{
    AppConfig, BehaviorConfig, DiffConfig, DiffPaths, FilterConfig, MatchingConfig, OutputConfig,
    ScoreConfig,
};
use crate::matching::ArrayMatchConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if ArrayMatchConfig::from_preset(&self.preset).is_none() {
            errors.push(ConfigError {
                field: "matching.preset".to_string(),
                message: format!(
                    "Invalid preset '{}'. Valid options: strict, balanced, lenient",
                    self.preset
                ),
            });
        }

        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                errors.push(ConfigError {
                    field: "matching.threshold".to_string(),
                    message: format!("Threshold must be between 0.0 and 1.0, got {threshold}"),
                });
            }
        }

        if self.max_depth == Some(0) {
            errors.push(ConfigError {
                field: "matching.max_depth".to_string(),
                message: "Maximum depth must be at least 1".to_string(),
            });
        }

        errors
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Severity is an enum; serde rejects unknown names on load
        Vec::new()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for DiffPaths {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let left_stdin = self.left.as_os_str() == "-";
        let right_stdin = self.right.as_os_str() == "-";
        if left_stdin && right_stdin {
            errors.push(ConfigError {
                field: "paths".to_string(),
                message: "Only one document can be read from stdin".to_string(),
            });
        }
        if !left_stdin && !self.left.exists() {
            errors.push(ConfigError {
                field: "paths.left".to_string(),
                message: format!("File not found: {}", self.left.display()),
            });
        }
        if !right_stdin && !self.right.exists() {
            errors.push(ConfigError {
                field: "paths.right".to_string(),
                message: format!("File not found: {}", self.right.display()),
            });
        }

        errors
    }
}

fn validate_pointer(pointer: Option<&str>) -> Option<ConfigError> {
    let pointer = pointer?;
    if pointer.is_empty() || pointer.starts_with('/') {
        return None;
    }
    Some(ConfigError {
        field: "pointer".to_string(),
        message: format!("JSON pointer must be empty or start with '/', got '{pointer}'"),
    })
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.paths.validate();
        errors.extend(validate_pointer(self.pointer.as_deref()));
        errors.extend(self.matching.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ScoreConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.paths.validate();
        errors.extend(validate_pointer(self.pointer.as_deref()));
        errors.extend(self.matching.validate());
        errors
    }
}
