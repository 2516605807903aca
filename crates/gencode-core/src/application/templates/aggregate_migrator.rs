//! Repository migrator for an aggregate.

use crate::application::ports::TemplateRenderer;
use crate::application::templates::render_artifact;
use crate::domain::naming::first_char_lower;
use crate::domain::{Aggregate, Artifact, ArtifactKind, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "aggregate_migrator.cs";
const DIR: &str = "Infrastructure/Ports/Adapters/Repository/Migration";

pub fn context(aggregate: &Aggregate) -> RenderContext {
    RenderContext::new()
        .with_variable("aggregate_name", aggregate.name.as_str())
        .with_variable("obj_var_name", first_char_lower(&aggregate.name))
}

pub fn render(renderer: &dyn TemplateRenderer, aggregate: &Aggregate) -> GenResult<Artifact> {
    render_artifact(
        renderer,
        ArtifactKind::AggregateMigrator,
        TEMPLATE_ID,
        &context(aggregate),
        DIR,
        format!("{}Migrator.cs", aggregate.name),
    )
}
