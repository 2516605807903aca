//! HTTP adapter endpoint method.
//!
//! The output is a fragment of the shared per-version `HttpAdapter.cs`:
//! members, constructor params, assignments and the handler method,
//! separated by `---` lines, meant to be merged by hand.

use std::path::Path;

use crate::application::ports::TemplateRenderer;
use crate::application::templates::{HTTP_ADAPTER_DIR, render_artifact};
use crate::domain::naming::{camel_to_snake_hyphen, member_var_name, strip_api_version_suffix};
use crate::domain::{Artifact, ArtifactKind, Endpoint, HttpMethod, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "endpoint.cs";

const ATTRIBUTE_SEPARATOR: &str = "\n\t\t";

/// Derive the endpoint variables.
///
/// Fails with `UnsupportedMethod` when the declared method is not one of
/// get, post, put, delete.
pub fn context(endpoint: &Endpoint) -> GenResult<RenderContext> {
    let method = HttpMethod::for_endpoint(&endpoint.name, &endpoint.method)?;

    let action_var_name = member_var_name(&endpoint.name, "Action");
    let command_translator_var_name = member_var_name(&endpoint.name, "CommandTranslator");

    let (return_type, return_value_translator_var_name) = match &endpoint.returns {
        Some(returns) => (
            format!("typeof({returns})"),
            member_var_name(strip_api_version_suffix(returns), "Translator"),
        ),
        None => ("null".to_string(), String::new()),
    };

    let attributes = endpoint
        .doc_attributes
        .iter()
        .map(|a| format!("[{a}]"))
        .collect::<Vec<_>>()
        .join(ATTRIBUTE_SEPARATOR);

    Ok(RenderContext::new()
        .with_variable("action_name", endpoint.name.as_str())
        .with_variable("command_name", endpoint.name.as_str())
        .with_variable("return_type", return_type)
        .with_variable("swagger_doc_defs_attribs", attributes)
        .with_variable("docs_section", endpoint.doc_section.as_str())
        .with_variable("docs_desc", endpoint.doc_desc.as_str())
        .with_variable("docs_returns", endpoint.doc_returns.as_str())
        .with_variable("method", method.verb_attribute())
        .with_variable("param_location", method.param_location())
        .with_variable("action_param_var_name", &action_var_name[1..])
        .with_variable(
            "command_translator_param_var_name",
            &command_translator_var_name[1..],
        )
        .with_variable("action_var_name", action_var_name)
        .with_variable("command_translator_var_name", command_translator_var_name)
        .with_variable(
            "return_value_translator_var_name",
            return_value_translator_var_name,
        )
        .with_variable("path", camel_to_snake_hyphen(&endpoint.name))
        .with_variable("Vx", format!("_{}", endpoint.version.token())))
}

pub fn render(renderer: &dyn TemplateRenderer, endpoint: &Endpoint) -> GenResult<Artifact> {
    let context = context(endpoint)?;
    render_artifact(
        renderer,
        ArtifactKind::HttpEndpoint,
        TEMPLATE_ID,
        &context,
        Path::new(HTTP_ADAPTER_DIR).join(endpoint.version.token()),
        "HttpAdapter.cs".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTemplateRenderer;
    use crate::domain::{ApiVersion, DomainError};
    use crate::error::GenError;
    use std::path::PathBuf;

    fn endpoint(method: &str, returns: Option<&str>) -> Endpoint {
        Endpoint {
            name: "PlaceOrder".into(),
            version: ApiVersion::new(1, 0, 0),
            method: method.into(),
            returns: returns.map(String::from),
            doc_attributes: vec!["Public".into(), "Beta".into()],
            doc_section: "Orders".into(),
            doc_desc: "Place an order.".into(),
            doc_returns: "The order.".into(),
        }
    }

    #[test]
    fn derives_member_and_param_names() {
        let ctx = context(&endpoint("post", Some("Order_v1_0_0"))).unwrap();
        assert_eq!(ctx.get("action_var_name"), Some("_placeOrderAction"));
        assert_eq!(ctx.get("action_param_var_name"), Some("placeOrderAction"));
        assert_eq!(
            ctx.get("command_translator_var_name"),
            Some("_placeOrderCommandTranslator")
        );
        assert_eq!(
            ctx.get("command_translator_param_var_name"),
            Some("placeOrderCommandTranslator")
        );
        assert_eq!(
            ctx.get("return_value_translator_var_name"),
            Some("_orderTranslator")
        );
        assert_eq!(ctx.get("return_type"), Some("typeof(Order_v1_0_0)"));
    }

    #[test]
    fn post_binds_from_body() {
        let ctx = context(&endpoint("POST", None)).unwrap();
        assert_eq!(ctx.get("method"), Some("HttpPost"));
        assert_eq!(ctx.get("param_location"), Some("FromBody"));
        assert_eq!(ctx.get("path"), Some("place-order"));
        assert_eq!(ctx.get("Vx"), Some("_v1_0_0"));
    }

    #[test]
    fn get_binds_from_query() {
        let ctx = context(&endpoint("get", None)).unwrap();
        assert_eq!(ctx.get("method"), Some("HttpGet"));
        assert_eq!(ctx.get("param_location"), Some("FromQuery"));
    }

    #[test]
    fn no_return_type_renders_null() {
        let ctx = context(&endpoint("delete", None)).unwrap();
        assert_eq!(ctx.get("return_type"), Some("null"));
        assert_eq!(ctx.get("return_value_translator_var_name"), Some(""));
    }

    #[test]
    fn doc_attributes_are_bracketed_one_per_line() {
        let ctx = context(&endpoint("get", None)).unwrap();
        assert_eq!(ctx.get("swagger_doc_defs_attribs"), Some("[Public]\n\t\t[Beta]"));
    }

    #[test]
    fn unsupported_method_never_reaches_the_renderer() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let err = render(&renderer, &endpoint("patch", None)).unwrap_err();
        assert!(matches!(
            err,
            GenError::Domain(DomainError::UnsupportedMethod { ref method, .. }) if method == "patch"
        ));
    }

    #[test]
    fn targets_the_versioned_adapter_file() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|id, _| id == TEMPLATE_ID)
            .returning(|_, _| Ok(String::from("[HttpPost(\"place-order\")]")));

        let artifact = render(&renderer, &endpoint("post", None)).unwrap();
        assert_eq!(artifact.kind, ArtifactKind::HttpEndpoint);
        assert_eq!(
            artifact.path,
            PathBuf::from("Infrastructure/Ports/Adapters/Http/v1_0_0/HttpAdapter.cs")
        );
    }
}
