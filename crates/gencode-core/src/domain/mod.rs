// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for gencode.
//!
//! This module contains pure logic with no I/O. Reading the definition file,
//! rendering templates and writing files are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Definitions are Clone + PartialEq and never
//!   mutated after parsing
//! - **Closed model**: [`Definition`] is an enum, so every dispatch is an
//!   exhaustive match
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    artifact::{Artifact, RenderContext},
    definition::{
        Action, Aggregate, Command, Definition, Endpoint, EntityId, HttpBbTranslator,
        HttpCommand, HttpCommandTranslator, Param, Property,
    },
    store::DefinitionStore,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ApiVersion, ArtifactKind, DefinitionKind, DeliveryMode, HttpMethod};
