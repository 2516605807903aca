//! Versioned HTTP adapter command.

use std::path::Path;

use crate::application::ports::TemplateRenderer;
use crate::application::templates::{HTTP_ADAPTER_DIR, param_expressions, render_artifact};
use crate::domain::{Artifact, ArtifactKind, HttpCommand, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "http_adapter_command.cs";

fn class_name(command: &HttpCommand) -> String {
    format!("{}Command_{}", command.name, command.version.token())
}

pub fn context(command: &HttpCommand) -> RenderContext {
    RenderContext::new()
        .with_variable("class_name", class_name(command))
        .with_variable("api_version", command.version.token())
        .with_variable("param_expressions", param_expressions(&command.params))
}

pub fn render(renderer: &dyn TemplateRenderer, command: &HttpCommand) -> GenResult<Artifact> {
    render_artifact(
        renderer,
        ArtifactKind::HttpCommand,
        TEMPLATE_ID,
        &context(command),
        Path::new(HTTP_ADAPTER_DIR)
            .join(command.version.token())
            .join("Model/Commands"),
        format!("{}.cs", class_name(command)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::templates::EchoRenderer;
    use crate::domain::{ApiVersion, Param};
    use std::path::PathBuf;

    #[test]
    fn class_and_path_carry_the_full_version() {
        let command = HttpCommand {
            name: "PlaceOrder".into(),
            version: ApiVersion::new(1, 2, 0),
            params: vec![Param::new("customerId", "string")],
        };
        let ctx = context(&command);
        assert_eq!(ctx.get("class_name"), Some("PlaceOrderCommand_v1_2_0"));
        assert_eq!(ctx.get("api_version"), Some("v1_2_0"));

        let artifact = render(&EchoRenderer, &command).unwrap();
        assert_eq!(artifact.file_name, "PlaceOrderCommand_v1_2_0.cs");
        assert_eq!(
            artifact.path,
            PathBuf::from(
                "Infrastructure/Ports/Adapters/Http/v1_2_0/Model/Commands/PlaceOrderCommand_v1_2_0.cs"
            )
        );
    }
}
