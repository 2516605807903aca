//! Translator from a versioned HTTP command to the application command.
//!
//! Joins two definitions: the application [`Command`] supplies the params,
//! the [`HttpCommandTranslator`] supplies the name. The version is resolved
//! by the caller, since an unversioned translator takes the requested one.

use std::path::Path;

use crate::application::ports::TemplateRenderer;
use crate::application::templates::{HTTP_ADAPTER_DIR, render_artifact};
use crate::domain::{
    ApiVersion, Artifact, ArtifactKind, Command, HttpCommandTranslator, RenderContext,
};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "command_translator.cs";

const ASSIGNMENT_SEPARATOR: &str = ",\n                ";

pub fn context(
    command: &Command,
    translator: &HttpCommandTranslator,
    version: ApiVersion,
) -> RenderContext {
    let api_version = version.token();
    let assignments = command
        .params
        .iter()
        .map(|p| format!("// {name} = command_{api_version}.{name}", name = p.name))
        .collect::<Vec<_>>()
        .join(ASSIGNMENT_SEPARATOR);

    RenderContext::new()
        .with_variable("action_name", translator.name.as_str())
        .with_variable("class_name", format!("{}CommandTranslator", translator.name))
        .with_variable("param_expressions", assignments)
        .with_variable("api_version", api_version)
}

pub fn render(
    renderer: &dyn TemplateRenderer,
    command: &Command,
    translator: &HttpCommandTranslator,
    version: ApiVersion,
) -> GenResult<Artifact> {
    render_artifact(
        renderer,
        ArtifactKind::HttpCommandTranslator,
        TEMPLATE_ID,
        &context(command, translator, version),
        Path::new(HTTP_ADAPTER_DIR)
            .join(version.token())
            .join("Translation/Commands"),
        format!("{}CommandTranslator.cs", translator.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::templates::EchoRenderer;
    use crate::domain::Param;
    use std::path::PathBuf;

    fn fixtures() -> (Command, HttpCommandTranslator) {
        (
            Command {
                name: "PlaceOrder".into(),
                params: vec![Param::new("customerId", "Guid"), Param::new("note", "string")],
            },
            HttpCommandTranslator {
                name: "PlaceOrder".into(),
                version: None,
            },
        )
    }

    #[test]
    fn params_become_commented_assignments() {
        let (command, translator) = fixtures();
        let ctx = context(&command, &translator, ApiVersion::new(1, 0, 0));
        assert_eq!(
            ctx.get("param_expressions"),
            Some(
                "// customerId = command_v1_0_0.customerId,\n                \
                 // note = command_v1_0_0.note"
            )
        );
        assert_eq!(ctx.get("class_name"), Some("PlaceOrderCommandTranslator"));
    }

    #[test]
    fn path_uses_the_bound_version() {
        let (command, translator) = fixtures();
        let artifact = render(&EchoRenderer, &command, &translator, ApiVersion::new(2, 0, 0))
            .unwrap();
        assert_eq!(
            artifact.path,
            PathBuf::from(
                "Infrastructure/Ports/Adapters/Http/v2_0_0/Translation/Commands/PlaceOrderCommandTranslator.cs"
            )
        );
    }
}
