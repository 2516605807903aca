// ============================================================================
// domain/error.rs - DEFINITION DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be carried inside the unified `GenError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Malformed definition file '{source_name}': {reason}")]
    DefinitionFormat { source_name: String, reason: String },

    #[error("Invalid API version '{value}': expected MAJOR.MINOR.PATCH")]
    InvalidApiVersion { value: String },

    #[error("Command translator '{name}' declares no Version and none was requested")]
    MissingApiVersion { name: String },

    // ========================================================================
    // Unsupported Errors
    // ========================================================================
    #[error("Don't know how to handle a '{kind}'")]
    UnknownKind { kind: String },

    #[error("Unsupported method '{method}' on endpoint '{endpoint}'")]
    UnsupportedMethod { endpoint: String, method: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DefinitionFormat { source_name, reason } => vec![
                format!("Check the definition file: {}", source_name),
                format!("Details: {}", reason),
                "Every Action, Endpoint and Aggregate entry needs a Name".into(),
            ],
            Self::InvalidApiVersion { value } => vec![
                format!("'{}' is not a version string", value),
                "Versions look like 1.0.0 (three dot-separated numbers)".into(),
            ],
            Self::MissingApiVersion { name } => vec![
                format!("Pass a version: gencode gen http_command_translator {} 1.0.0", name),
                format!("Or add a Version to the '{}' entry under CommandTranslators", name),
            ],
            Self::UnknownKind { kind } => vec![
                format!("'{}' is not a known definition kind", kind),
                "Known kinds: action, aggregate, command, entity_id, http_bb_translator,".into(),
                "             http_command_translator, http_command, http_endpoint".into(),
            ],
            Self::UnsupportedMethod { endpoint, .. } => vec![
                format!("Fix the Method of endpoint '{}'", endpoint),
                "Supported methods: get, post, put, delete".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DefinitionFormat { .. }
            | Self::InvalidApiVersion { .. }
            | Self::MissingApiVersion { .. } => ErrorCategory::Validation,
            Self::UnknownKind { .. } | Self::UnsupportedMethod { .. } => {
                ErrorCategory::Unsupported
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Unsupported,
}
