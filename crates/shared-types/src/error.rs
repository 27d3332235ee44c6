use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::validation::{join_violations, Violation};

/// Text shown when a delivery failure carries no usable detail.
pub const GENERIC_FAILURE: &str = "Invio non riuscito. Riprova tra qualche istante.";

/// Categorization of report errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportErrorKind {
    /// The form failed validation; nothing left the client.
    Validation,
    /// The webhook answered with a non-success status.
    Rejected,
    /// The request never produced a response.
    Transport,
}

impl fmt::Display for ReportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportErrorKind::Validation => write!(f, "ValidationError"),
            ReportErrorKind::Rejected => write!(f, "Rejected"),
            ReportErrorKind::Transport => write!(f, "TransportError"),
        }
    }
}

/// Structured error for a failed submit attempt.
///
/// `message` is the human-readable reason shown in the result banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportError {
    pub kind: ReportErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl ReportError {
    /// Build a validation error from the violations found on the form.
    pub fn validation(violations: &[Violation]) -> Self {
        let field_errors = violations
            .iter()
            .map(|v| (v.field.to_string(), v.message.to_string()))
            .collect();
        Self {
            kind: ReportErrorKind::Validation,
            message: join_violations(violations),
            status: None,
            field_errors,
        }
    }

    /// The webhook answered with `status` outside the 2xx range.
    pub fn rejected(status: u16) -> Self {
        Self {
            kind: ReportErrorKind::Rejected,
            message: format!("Invio non riuscito: il server ha risposto con HTTP {status}."),
            status: Some(status),
            field_errors: HashMap::new(),
        }
    }

    /// The request failed before a response arrived.
    pub fn transport(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let message = if detail.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            format!("Invio non riuscito: {}", detail.trim())
        };
        Self {
            kind: ReportErrorKind::Transport,
            message,
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ReportErrorKind::Validation
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ReportError {}
