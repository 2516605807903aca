//! gencode core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gencode
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gencode-cli (CLI)             │
//! │   (clap, config, prompt, output)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (GenerateService, Generator)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer, Prompt)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gencode-adapters (Infrastructure)    │
//! │ (DefinitionLoader, JinjaRenderer, fs)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Definition, DefinitionStore, naming)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gencode_core::prelude::*;
//!
//! let service = GenerateService::new(store, renderer, filesystem, prompt, "./src");
//! let request = GenerateRequest::new(ArtifactKind::Action, "PlaceOrder");
//! match service.run(&request)? {
//!     Delivery::Written(path) => println!("wrote {}", path.display()),
//!     Delivery::Kept(path) => println!("kept {}", path.display()),
//!     Delivery::Print(artifact) => println!("{}", artifact.source),
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DefinitionSummary, Delivery, GenerateRequest, GenerateService, Generator,
        ports::{Filesystem, OverwritePrompt, TemplateRenderer},
    };
    pub use crate::domain::{
        ApiVersion, Artifact, ArtifactKind, Definition, DefinitionKind, DefinitionStore,
        RenderContext,
    };
    pub use crate::error::{GenError, GenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
