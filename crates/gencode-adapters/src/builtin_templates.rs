//! Templates compiled into the binary.
//!
//! Each artifact template id maps to one Jinja source under `templates/`.
//! A `--templates DIR` override is consulted first by
//! [`JinjaRenderer`](crate::renderer::JinjaRenderer); these are the fallback.

const BUILTIN: [(&str, &str); 9] = [
    ("action.cs", include_str!("../templates/action.cs")),
    ("aggregate.cs", include_str!("../templates/aggregate.cs")),
    (
        "aggregate_migrator.cs",
        include_str!("../templates/aggregate_migrator.cs"),
    ),
    ("command.cs", include_str!("../templates/command.cs")),
    ("entity_id.cs", include_str!("../templates/entity_id.cs")),
    (
        "http_bb_translator.cs",
        include_str!("../templates/http_bb_translator.cs"),
    ),
    (
        "command_translator.cs",
        include_str!("../templates/command_translator.cs"),
    ),
    (
        "http_adapter_command.cs",
        include_str!("../templates/http_adapter_command.cs"),
    ),
    ("endpoint.cs", include_str!("../templates/endpoint.cs")),
];

/// Source of a built-in template.
pub fn builtin(template_id: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(id, _)| *id == template_id)
        .map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gencode_core::application::templates::TEMPLATE_IDS;

    #[test]
    fn every_artifact_template_is_built_in() {
        for id in TEMPLATE_IDS {
            assert!(builtin(id).is_some(), "missing built-in template {id}");
        }
        assert_eq!(BUILTIN.len(), TEMPLATE_IDS.len());
    }

    #[test]
    fn unknown_id_has_no_source() {
        assert!(builtin("widget.cs").is_none());
    }
}
