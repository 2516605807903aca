//! Entity identity value type.

use std::path::PathBuf;

use crate::application::ports::TemplateRenderer;
use crate::application::templates::render_artifact;
use crate::domain::naming::first_char_lower;
use crate::domain::{Artifact, ArtifactKind, EntityId, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "entity_id.cs";
const DIR: &str = "Domain/Model";

pub fn context(id: &EntityId) -> RenderContext {
    let namespace = if id.entity_is_aggregate {
        format!("namespace Domain.Model.{}", id.entity_name)
    } else {
        "namespace Domain.Model".to_string()
    };
    RenderContext::new()
        .with_variable("namespace", namespace)
        .with_variable("class_name", id.name.as_str())
        .with_variable("obj_var_name", first_char_lower(&id.name))
}

pub fn render(renderer: &dyn TemplateRenderer, id: &EntityId) -> GenResult<Artifact> {
    let mut dir = PathBuf::from(DIR);
    if id.entity_is_aggregate {
        dir.push(&id.entity_name);
    }
    render_artifact(
        renderer,
        ArtifactKind::EntityId,
        TEMPLATE_ID,
        &context(id),
        dir,
        format!("{}.cs", id.name),
    )
}
