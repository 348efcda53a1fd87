//! Unified error types for jsondiff-tools.
//!
//! The comparison engine itself is total: it only fails when a caller asks
//! for a guarded traversal or hands it an invalid configuration. Everything
//! else here covers the edges (reading documents, parsing, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jsondiff-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum JsonDiffError {
    /// Errors while turning input text into a JSON value
    #[error("Failed to parse JSON: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during comparison
    #[error("Comparison failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffErrorKind,
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

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
}

/// Specific diff error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffErrorKind {
    #[error("Nesting depth {depth} exceeds the configured limit of {limit} at '{path}'")]
    DepthLimitExceeded {
        depth: usize,
        limit: usize,
        path: String,
    },

    #[error("Invalid threshold value for {name}: {value} (must be 0.0-1.0)")]
    InvalidThreshold { name: &'static str, value: f64 },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for jsondiff-tools operations
pub type Result<T> = std::result::Result<T, JsonDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl JsonDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for empty input
    pub fn empty_input(origin: impl Into<String>) -> Self {
        Self::parse(format!("in {}", origin.into()), ParseErrorKind::EmptyInput)
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

    /// Create a diff error
    pub fn diff(context: impl Into<String>, source: DiffErrorKind) -> Self {
        Self::Diff {
            context: context.into(),
            source,
        }
    }

    /// Create a depth-limit error for the value at `path`
    pub fn depth_limit(depth: usize, limit: usize, path: impl Into<String>) -> Self {
        Self::diff(
            "traversal aborted",
            DiffErrorKind::DepthLimitExceeded {
                depth,
                limit,
                path: path.into(),
            },
        )
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

impl From<std::io::Error> for JsonDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for JsonDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, so the final message reads outermost first:
///
/// ```ignore
/// use jsondiff_tools::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<Value> {
///     let text = std::fs::read_to_string(path).context("reading left document")?;
///     parse_json_str(&text).with_context(|| format!("parsing {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<JsonDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: JsonDiffError, new_ctx: &str) -> JsonDiffError {
    match err {
        JsonDiffError::Parse {
            context: existing,
            source,
        } => JsonDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        JsonDiffError::Diff {
            context: existing,
            source,
        } => JsonDiffError::Diff {
            context: chain_context(new_ctx, &existing),
            source,
        },
        JsonDiffError::Io {
            path,
            message,
            source,
        } => JsonDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        JsonDiffError::Config(msg) => JsonDiffError::Config(chain_context(new_ctx, &msg)),
        JsonDiffError::Validation(msg) => JsonDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to a validation error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| JsonDiffError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| JsonDiffError::Validation(f().into()))
    }
}
