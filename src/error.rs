//! Unified error types for career-compass.
//!
//! The matching engine itself has no runtime failure modes; everything in
//! this module describes problems at the configuration and I/O boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for career-compass operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CompassError {
    /// Errors while loading or interpreting catalog/criteria configuration
    #[error("Failed to load catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while loading a student profile
    #[error("Failed to load profile: {context}")]
    Profile {
        context: String,
        #[source]
        source: ProfileErrorKind,
    },

    /// Errors during report rendering
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Unknown file format - expected a .yaml/.yml or .json catalog")]
    UnknownFormat,

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Career '{career}' references unknown category '{category}'")]
    UnknownCategory { career: String, category: String },

    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),
}

/// Specific profile error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProfileErrorKind {
    #[error("Unknown file format - expected a .yaml/.yml or .json profile")]
    UnknownFormat,

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for career-compass operations
pub type Result<T> = std::result::Result<T, CompassError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CompassError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a profile error with context
    pub fn profile(context: impl Into<String>, source: ProfileErrorKind) -> Self {
        Self::Profile {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CompassError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CompassError {
    fn from(err: serde_json::Error) -> Self {
        Self::profile(
            "JSON deserialization",
            ProfileErrorKind::InvalidJson(err.to_string()),
        )
    }
}
