//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the definition
//! model. Model errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No definition matched a generation request.
    #[error("No {kind} definition found called '{name}'{}", version_suffix(.version))]
    DefinitionNotFound {
        kind: String,
        name: String,
        version: Option<String>,
    },

    /// Template rendering failed.
    #[error("Rendering template '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The overwrite prompt could not be answered.
    #[error("Confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Shared state lock poisoned.
    #[error("Internal state lock poisoned")]
    LockPoisoned,
}

fn version_suffix(version: &Option<String>) -> String {
    version
        .as_ref()
        .map(|v| format!(" with version '{v}'"))
        .unwrap_or_default()
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DefinitionNotFound { kind, name, version } => {
                let mut out = vec![
                    format!("'{}' is not defined as a {} in the definition file", name, kind),
                    "Try: gencode list to see what is defined".into(),
                ];
                if version.is_some() {
                    out.push("Check the version: it is part of the definition's identity".into());
                }
                out
            }
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{}' could not be rendered", template),
                "Check the template file if you override templates with --templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check the --src directory".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Standard input could not be read".into(),
                "Run interactively to answer overwrite prompts".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DefinitionNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
