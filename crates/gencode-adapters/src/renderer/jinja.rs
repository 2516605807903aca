//! `minijinja` renderer.
//!
//! Every render builds a fresh [`Environment`] holding just the requested
//! template. Undefined variables are errors, so a template that drifts
//! from its context fails loudly instead of emitting blanks.

use std::path::PathBuf;

use minijinja::{Environment, UndefinedBehavior};
use tracing::{debug, instrument};

use gencode_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::GenResult,
};

use crate::builtin_templates;
use crate::filesystem::map_io_error;

/// Renders the built-in templates, or same-named files from an override
/// directory when one is configured.
#[derive(Debug, Clone, Default)]
pub struct JinjaRenderer {
    templates_dir: Option<PathBuf>,
}

impl JinjaRenderer {
    /// Renderer using only the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that prefers `<dir>/<template_id>` over the built-in source.
    pub fn with_templates_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: Some(dir.into()),
        }
    }

    fn source(&self, template_id: &str) -> GenResult<String> {
        if let Some(dir) = &self.templates_dir {
            let path = dir.join(template_id);
            if path.is_file() {
                debug!(path = %path.display(), "Using template override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| map_io_error(&path, e, "read template"));
            }
        }

        builtin_templates::builtin(template_id)
            .map(str::to_string)
            .ok_or_else(|| {
                ApplicationError::RenderingFailed {
                    template: template_id.to_string(),
                    reason: "no such template".into(),
                }
                .into()
            })
    }
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip(self, context), fields(vars = context.len()))]
    fn render(&self, template_id: &str, context: &RenderContext) -> GenResult<String> {
        let source = self.source(template_id)?;
        let failed = |e: minijinja::Error| ApplicationError::RenderingFailed {
            template: template_id.to_string(),
            reason: e.to_string(),
        };

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(template_id, &source).map_err(failed)?;

        let rendered = env
            .get_template(template_id)
            .and_then(|tmpl| tmpl.render(context))
            .map_err(failed)?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gencode_core::error::GenError;
    use tempfile::TempDir;

    fn action_context() -> RenderContext {
        RenderContext::new()
            .with_variable("class_name", "PlaceOrderAction")
            .with_variable("command_name", "PlaceOrderCommand")
            .with_variable("return_class_name", "OrderId")
    }

    #[test]
    fn renders_builtin_action() {
        let out = JinjaRenderer::new()
            .render("action.cs", &action_context())
            .unwrap();
        assert!(out.contains("public class PlaceOrderAction : Action<PlaceOrderCommand, OrderId>"));
        assert!(out.contains("public override async Task<OrderId> ExecuteAsync("));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn undefined_variable_fails() {
        let ctx = RenderContext::new().with_variable("class_name", "X");
        let err = JinjaRenderer::new().render("action.cs", &ctx).unwrap_err();
        assert!(matches!(
            err,
            GenError::Application(ApplicationError::RenderingFailed { ref template, .. }) if template == "action.cs"
        ));
    }

    #[test]
    fn unknown_template_fails() {
        let err = JinjaRenderer::new()
            .render("widget.cs", &RenderContext::new())
            .unwrap_err();
        assert!(err.to_string().contains("no such template"));
    }

    #[test]
    fn override_directory_takes_precedence() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("action.cs"), "// custom {{ class_name }}").unwrap();

        let renderer = JinjaRenderer::with_templates_dir(dir.path());
        assert_eq!(
            renderer.render("action.cs", &action_context()).unwrap(),
            "// custom PlaceOrderAction"
        );
        // Ids without an override still fall back to the built-ins.
        let cmd = RenderContext::new()
            .with_variable("class_name", "PlaceOrderCommand")
            .with_variable("param_expressions", "public Guid customerId { get; set; }");
        assert!(renderer.render("command.cs", &cmd).unwrap().contains("customerId"));
    }

    #[test]
    fn syntax_errors_in_overrides_are_rendering_failures() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("command.cs"), "{% if %}").unwrap();

        let err = JinjaRenderer::with_templates_dir(dir.path())
            .render("command.cs", &RenderContext::new())
            .unwrap_err();
        assert!(matches!(
            err,
            GenError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn endpoint_without_return_renders_plain_ok() {
        let ctx = RenderContext::new()
            .with_variable("action_name", "PlaceOrder")
            .with_variable("command_name", "PlaceOrder")
            .with_variable("return_type", "null")
            .with_variable("swagger_doc_defs_attribs", "[Public]")
            .with_variable("docs_section", "Orders")
            .with_variable("docs_desc", "Place an order.")
            .with_variable("docs_returns", "Nothing.")
            .with_variable("method", "HttpPost")
            .with_variable("param_location", "FromBody")
            .with_variable("command_translator_var_name", "_placeOrderCommandTranslator")
            .with_variable("action_var_name", "_placeOrderAction")
            .with_variable("return_value_translator_var_name", "")
            .with_variable("action_param_var_name", "placeOrderAction")
            .with_variable("command_translator_param_var_name", "placeOrderCommandTranslator")
            .with_variable("path", "place-order")
            .with_variable("Vx", "_v1_0_0");

        let out = JinjaRenderer::new().render("endpoint.cs", &ctx).unwrap();
        assert!(out.contains("[HttpPost(\"place-order\")]"));
        assert!(out.contains("[FromBody] PlaceOrderCommand_v1_0_0 command_v1_0_0, CancellationToken ct)"));
        assert!(out.contains("// return Ok();"));
        assert!(!out.contains("var xxx"));
    }
}
