//! Application action class.

use crate::application::ports::TemplateRenderer;
use crate::application::templates::render_artifact;
use crate::domain::{Action, Artifact, ArtifactKind, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "action.cs";
const DIR: &str = "Application/Actions";

pub fn context(action: &Action) -> RenderContext {
    RenderContext::new()
        .with_variable("class_name", format!("{}Action", action.name))
        .with_variable("command_name", format!("{}Command", action.name))
        .with_variable(
            "return_class_name",
            action.returns.as_deref().unwrap_or("object"),
        )
}

pub fn render(renderer: &dyn TemplateRenderer, action: &Action) -> GenResult<Artifact> {
    render_artifact(
        renderer,
        ArtifactKind::Action,
        TEMPLATE_ID,
        &context(action),
        DIR,
        format!("{}Action.cs", action.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTemplateRenderer;
    use std::path::PathBuf;

    fn place_order(returns: Option<&str>) -> Action {
        Action {
            name: "PlaceOrder".into(),
            returns: returns.map(String::from),
        }
    }

    #[test]
    fn derives_class_and_command_names() {
        let ctx = context(&place_order(Some("OrderId")));
        assert_eq!(ctx.get("class_name"), Some("PlaceOrderAction"));
        assert_eq!(ctx.get("command_name"), Some("PlaceOrderCommand"));
        assert_eq!(ctx.get("return_class_name"), Some("OrderId"));
    }

    #[test]
    fn missing_return_type_becomes_object() {
        let ctx = context(&place_order(None));
        assert_eq!(ctx.get("return_class_name"), Some("object"));
    }

    #[test]
    fn renders_action_template_into_actions_dir() {
        let expected = context(&place_order(None));
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(move |id, ctx| id == TEMPLATE_ID && *ctx == expected)
            .times(1)
            .returning(|_, _| Ok("class PlaceOrderAction {}".into()));

        let artifact = render(&renderer, &place_order(None)).unwrap();
        assert_eq!(artifact.kind, ArtifactKind::Action);
        assert_eq!(artifact.file_name, "PlaceOrderAction.cs");
        assert_eq!(
            artifact.path,
            PathBuf::from("Application/Actions/PlaceOrderAction.cs")
        );
        assert_eq!(artifact.source, "class PlaceOrderAction {}");
    }
}
