//! Application layer for gencode.
//!
//! This layer contains:
//! - **Templates**: Per-kind variable derivation and output paths
//! - **Services**: Use case orchestration (Generator, GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Naming rules live in `crate::domain::naming`; this layer only wires
//! them to templates and delivers the result.

pub mod error;
pub mod ports;
pub mod services;
pub mod templates;

pub use services::{
    DefinitionSummary, Delivery, GenerateRequest, GenerateService, Generator,
};

pub use ports::{Filesystem, OverwritePrompt, TemplateRenderer};

pub use error::ApplicationError;
