//! Application services - orchestrate use cases.
//!
//! [`Generator`] maps a definition to its artifact template.
//! [`GenerateService`] resolves requests against the definition store,
//! calls the generator, and delivers the result.

pub mod generate_service;
pub mod generator;

pub use generate_service::{DefinitionSummary, Delivery, GenerateRequest, GenerateService};
pub use generator::Generator;
