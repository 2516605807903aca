//! Domain aggregate root class.
//!
//! The aggregate's own identity (`{Name}Id`) is declared by the base class,
//! so it is left out of the generated accessors but still appears in the
//! constructor.

use crate::application::ports::TemplateRenderer;
use crate::application::templates::{MEMBER_SEPARATOR, auto_property, render_artifact};
use crate::domain::naming::first_char_lower;
use crate::domain::{Aggregate, Artifact, ArtifactKind, RenderContext};
use crate::error::GenResult;

pub const TEMPLATE_ID: &str = "aggregate.cs";

const ARG_SEPARATOR: &str = ",\n            ";
const INIT_SEPARATOR: &str = ",\n                    ";

pub fn context(aggregate: &Aggregate) -> RenderContext {
    RenderContext::new()
        .with_variable("class_name", aggregate.name.as_str())
        .with_variable("obj_var_name", first_char_lower(&aggregate.name))
        .with_variable("property_expressions", property_expressions(aggregate))
        .with_variable("property_method_args", property_method_args(aggregate))
        .with_variable("property_init_args", property_init_args(aggregate))
}

pub fn render(renderer: &dyn TemplateRenderer, aggregate: &Aggregate) -> GenResult<Artifact> {
    render_artifact(
        renderer,
        ArtifactKind::Aggregate,
        TEMPLATE_ID,
        &context(aggregate),
        format!("Domain/Model/{}", aggregate.name),
        format!("{}.cs", aggregate.name),
    )
}

fn property_expressions(aggregate: &Aggregate) -> String {
    let id_name = aggregate.id_name();
    aggregate
        .properties
        .iter()
        .filter(|p| p.name != id_name)
        .map(|p| auto_property(&p.type_name, &p.name))
        .collect::<Vec<_>>()
        .join(MEMBER_SEPARATOR)
}

fn property_method_args(aggregate: &Aggregate) -> String {
    aggregate
        .properties
        .iter()
        .map(|p| format!("{} {}", p.type_name, first_char_lower(&p.name)))
        .chain(std::iter::once("ActionId actionId".to_string()))
        .collect::<Vec<_>>()
        .join(ARG_SEPARATOR)
}

fn property_init_args(aggregate: &Aggregate) -> String {
    std::iter::once("DomainModelVersion = ContextDomainModelVersion.Latest()".to_string())
        .chain(
            aggregate
                .properties
                .iter()
                .map(|p| format!("{} = {}", p.name, first_char_lower(&p.name))),
        )
        .collect::<Vec<_>>()
        .join(INIT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::templates::EchoRenderer;
    use crate::domain::Property;
    use std::path::PathBuf;

    fn order() -> Aggregate {
        Aggregate {
            name: "Order".into(),
            properties: vec![
                Property::new("OrderId", "OrderId"),
                Property::new("Status", "OrderStatus"),
            ],
        }
    }

    #[test]
    fn identity_property_is_not_an_accessor() {
        let ctx = context(&order());
        assert_eq!(
            ctx.get("property_expressions"),
            Some("public OrderStatus Status { get; set; }")
        );
    }

    #[test]
    fn constructor_takes_every_property_and_action_id() {
        let ctx = context(&order());
        assert_eq!(
            ctx.get("property_method_args"),
            Some("OrderId orderId,\n            OrderStatus status,\n            ActionId actionId")
        );
        assert_eq!(
            ctx.get("property_init_args"),
            Some(
                "DomainModelVersion = ContextDomainModelVersion.Latest(),\n                    \
                 OrderId = orderId,\n                    Status = status"
            )
        );
        assert_eq!(ctx.get("obj_var_name"), Some("order"));
    }

    #[test]
    fn empty_aggregate_still_has_action_id_and_version() {
        let ctx = context(&Aggregate {
            name: "Empty".into(),
            properties: vec![],
        });
        assert_eq!(ctx.get("property_expressions"), Some(""));
        assert_eq!(ctx.get("property_method_args"), Some("ActionId actionId"));
        assert_eq!(
            ctx.get("property_init_args"),
            Some("DomainModelVersion = ContextDomainModelVersion.Latest()")
        );
    }

    #[test]
    fn written_under_its_own_model_folder() {
        let artifact = render(&EchoRenderer, &order()).unwrap();
        assert_eq!(artifact.path, PathBuf::from("Domain/Model/Order/Order.cs"));
    }
}
