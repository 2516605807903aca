//! Application command class.

use crate::application::ports::TemplateRenderer;
use crate::application::templates::{param_expressions, render_artifact};
use crate::domain::{Artifact, ArtifactKind, Command, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "command.cs";
const DIR: &str = "Application/Actions/Commands";

pub fn context(command: &Command) -> RenderContext {
    RenderContext::new()
        .with_variable("class_name", format!("{}Command", command.name))
        .with_variable("param_expressions", param_expressions(&command.params))
}

pub fn render(renderer: &dyn TemplateRenderer, command: &Command) -> GenResult<Artifact> {
    render_artifact(
        renderer,
        ArtifactKind::Command,
        TEMPLATE_ID,
        &context(command),
        DIR,
        format!("{}Command.cs", command.name),
    )
}
