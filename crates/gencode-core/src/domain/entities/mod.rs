pub mod artifact;
pub mod definition;
pub mod store;

pub use artifact::{Artifact, RenderContext};
pub use definition::Definition;
pub use store::DefinitionStore;
