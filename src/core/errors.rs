/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::process::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for every fallible simulator operation
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Validation errors raised before any simulation work starts
///
/// Every variant carries the offending field or value so that a presentation
/// layer can point the user at the exact input that was rejected.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("No processes supplied")]
    #[diagnostic(
        code(scheduler::empty_input),
        help("Add at least one process to the request.")
    )]
    EmptyInput,

    #[error("Duplicate process id '{id}'")]
    #[diagnostic(
        code(scheduler::duplicate_id),
        help("Every process in a request needs a distinct id.")
    )]
    DuplicateId { id: ProcessId },

    #[error("Invalid {field} for process '{process}': {value}")]
    #[diagnostic(
        code(scheduler::invalid_field),
        help("Arrival must be an integer >= 0 and burst an integer > 0.")
    )]
    InvalidField {
        process: ProcessId,
        field: String,
        value: String,
    },

    /// `value` is the supplied quantum as written, if any
    #[error("Round robin requires a positive time quantum (got {})", display_quantum(.value))]
    #[diagnostic(
        code(scheduler::missing_quantum),
        help("Pass a quantum >= 1. No default quantum is assumed.")
    )]
    MissingQuantum { value: Option<String> },

    #[error("Unsupported scheduling policy '{0}'")]
    #[diagnostic(
        code(scheduler::unsupported_policy),
        help("Valid: fcfs, sjf, srtf, round_robin, priority, priority_preemptive")
    )]
    UnsupportedPolicy(String),

    #[error("Too many processes: {count} exceeds limit {limit}")]
    #[diagnostic(
        code(scheduler::too_many_processes),
        help("Split the workload into smaller requests.")
    )]
    TooManyProcesses { count: usize, limit: usize },

    #[error("Malformed request: {0}")]
    #[diagnostic(
        code(scheduler::malformed_request),
        help("The request must be a JSON object with 'policy' and 'processes'.")
    )]
    MalformedRequest(String),

    #[error("Internal error: {0}")]
    #[diagnostic(
        code(scheduler::internal_error),
        help("An unexpected internal error occurred. Please report this issue.")
    )]
    Internal(String),
}

fn display_quantum(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("none")
}

impl SchedulerError {
    /// Build an `InvalidField` error from any displayable value
    pub fn invalid_field(
        process: impl Into<ProcessId>,
        field: &str,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidField {
            process: process.into(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Short machine-readable kind, matches the serde tag
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::DuplicateId { .. } => "duplicate_id",
            Self::InvalidField { .. } => "invalid_field",
            Self::MissingQuantum { .. } => "missing_quantum",
            Self::UnsupportedPolicy(_) => "unsupported_policy",
            Self::TooManyProcesses { .. } => "too_many_processes",
            Self::MalformedRequest(_) => "malformed_request",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::MalformedRequest(err.to_string())
    }
}
