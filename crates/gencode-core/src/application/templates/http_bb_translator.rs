//! Translator between a domain building block and its HTTP model.

use std::path::Path;

use crate::application::ports::TemplateRenderer;
use crate::application::templates::{HTTP_ADAPTER_DIR, render_artifact};
use crate::domain::naming::first_char_lower;
use crate::domain::{Artifact, ArtifactKind, HttpBbTranslator, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "http_bb_translator.cs";

pub fn context(translator: &HttpBbTranslator) -> RenderContext {
    RenderContext::new()
        .with_variable("bb_name", translator.name.as_str())
        .with_variable("class_name", format!("{}Translator", translator.name))
        .with_variable("obj_var_name", first_char_lower(&translator.name))
}

pub fn render(
    renderer: &dyn TemplateRenderer,
    translator: &HttpBbTranslator,
) -> GenResult<Artifact> {
    render_artifact(
        renderer,
        ArtifactKind::HttpBbTranslator,
        TEMPLATE_ID,
        &context(translator),
        Path::new(HTTP_ADAPTER_DIR).join("Common/Translation"),
        format!("{}Translator.cs", translator.name),
    )
}
