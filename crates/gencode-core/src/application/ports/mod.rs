//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gencode-adapters` implement
//! these, and the CLI provides the interactive prompt.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations under the source root
//!   - `TemplateRenderer`: Named template rendering
//!   - `OverwritePrompt`: Confirmation before replacing an existing file

pub mod output;

pub use output::{Filesystem, OverwritePrompt, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockOverwritePrompt, MockTemplateRenderer};
