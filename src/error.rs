//! Error taxonomy shared by the MCP and HTTP surfaces
//!
//! Validation, missing-resource and rate-limit failures are typed so each
//! transport can map them to its own status codes. Unexpected filesystem
//! faults never become a [`DocsError`]: storage logs them and degrades to an
//! empty result instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocsError {
    /// Bad component, filename, query or format
    #[error("Invalid {field} '{value}': {message}")]
    Validation {
        field: &'static str,
        value: String,
        message: String,
        allowed: Vec<String>,
    },

    #[error("Documentation not found for component '{component}'")]
    ComponentNotFound { component: String },

    #[error("Documentation file '{filename}' not found in component '{component}'")]
    FileNotFound { component: String, filename: String },

    #[error("Too many search requests, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },
}

impl DocsError {
    /// Create a validation error for a request field
    pub fn validation<I, S>(
        field: &'static str,
        value: impl Into<String>,
        message: impl Into<String>,
        allowed: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            field,
            value: value.into(),
            message: message.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Stable machine-readable kind of the error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::ComponentNotFound { .. } | Self::FileNotFound { .. } => "not_found",
            Self::RateLimited { .. } => "rate_limit_exceeded",
        }
    }

    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        }
    }

    /// Convert into the serializable error payload
    pub fn to_output(&self) -> DocsErrorOutput {
        let mut output = DocsErrorOutput::new(self.kind(), self.to_string());
        match self {
            Self::Validation {
                field,
                value,
                allowed,
                ..
            } => {
                output.field = Some((*field).to_string());
                output.value = Some(value.clone());
                output.allowed = allowed.clone();
            }
            Self::ComponentNotFound { component } => {
                output.component = Some(component.clone());
            }
            Self::FileNotFound {
                component,
                filename,
            } => {
                output.component = Some(component.clone());
                output.filename = Some(filename.clone());
            }
            Self::RateLimited { retry_after_secs } => {
                output.retry_after = Some(*retry_after_secs);
            }
        }
        output
    }
}

/// Error output returned by tools and embedded in HTTP error envelopes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocsErrorOutput {
    pub error: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

impl DocsErrorOutput {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            kind: kind.into(),
            field: None,
            value: None,
            allowed: Vec::new(),
            component: None,
            filename: None,
            retry_after: None,
        }
    }

    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_output_carries_field_details() {
        let err = DocsError::validation("format", "pdf", "unsupported format", ["md", "txt"]);
        let output = err.to_output();

        assert_eq!(output.kind, "validation_error");
        assert_eq!(output.field.as_deref(), Some("format"));
        assert_eq!(output.value.as_deref(), Some("pdf"));
        assert_eq!(output.allowed, vec!["md".to_string(), "txt".to_string()]);
        assert!(output.retry_after.is_none());
    }

    #[test]
    fn test_not_found_echoes_identifiers() {
        let err = DocsError::FileNotFound {
            component: "asmc-api".to_string(),
            filename: "setup.md".to_string(),
        };
        let output = err.to_output();

        assert_eq!(output.kind, "not_found");
        assert_eq!(output.component.as_deref(), Some("asmc-api"));
        assert_eq!(output.filename.as_deref(), Some("setup.md"));
    }

    #[test]
    fn test_rate_limited_json_uses_retry_after_key() {
        let err = DocsError::RateLimited {
            retry_after_secs: 42,
        };
        assert_eq!(err.retry_after_secs(), Some(42));

        let json = err.to_output().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["retryAfter"], 42);
        assert_eq!(value["kind"], "rate_limit_exceeded");
        assert!(value.get("allowed").is_none());
    }
}
