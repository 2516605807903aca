//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gencode-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::RenderContext;
use crate::error::GenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gencode_adapters::filesystem::LocalFilesystem` (production)
/// - `gencode_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> GenResult<()>;

    /// Read a whole file as text.
    fn read_file(&self, path: &Path) -> GenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Templates are addressed by id (`action`, `endpoint`, ...). A missing
/// variable is a rendering error, never an empty substitution.
#[cfg_attr(test, automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template_id: &str, context: &RenderContext) -> GenResult<String>;
}

/// Port for asking whether an existing file may be replaced.
#[cfg_attr(test, automock)]
pub trait OverwritePrompt: Send + Sync {
    /// `Ok(true)` only on an explicit yes.
    fn confirm_overwrite(&self, path: &Path) -> GenResult<bool>;
}
