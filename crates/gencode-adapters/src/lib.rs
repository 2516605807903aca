//! Infrastructure adapters for gencode.
//!
//! This crate implements the ports defined in `gencode_core::application::ports`
//! and reads definition files. It contains all external dependencies and
//! I/O operations.

pub mod builtin_templates;
pub mod definition_loader;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use definition_loader::DefinitionLoader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::JinjaRenderer;
