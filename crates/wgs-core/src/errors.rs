//! Structured error types shared across the growth standards crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GrowthError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (chart, sex, offending values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the growth standards engine.
///
/// Clamping of an out-of-range independent variable is deliberately absent:
/// it is reported alongside a successful result, not as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GrowthError {
    /// The requested (chart, sex) combination has no reference table.
    #[error("data unavailable: {0}")]
    DataUnavailable(ErrorInfo),
    /// A reference row or table violates the data integrity contract.
    #[error("malformed reference row: {0}")]
    MalformedReferenceRow(ErrorInfo),
    /// A caller supplied input that cannot be assessed.
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(ErrorInfo),
    /// Engine configuration could not be parsed or failed validation.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GrowthError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GrowthError::DataUnavailable(info)
            | GrowthError::MalformedReferenceRow(info)
            | GrowthError::InvalidMeasurement(info)
            | GrowthError::Config(info)
            | GrowthError::Serde(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Shorthand for an [`GrowthError::InvalidMeasurement`] without context.
    pub fn invalid(code: &str, message: impl Into<String>) -> Self {
        GrowthError::InvalidMeasurement(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`GrowthError::MalformedReferenceRow`] without context.
    pub fn malformed(code: &str, message: impl Into<String>) -> Self {
        GrowthError::MalformedReferenceRow(ErrorInfo::new(code, message))
    }
}
