//! Artifact templates.
//!
//! One module per artifact kind. Each derives the variables its template
//! needs from a definition, picks the output path, and hands rendering to
//! the injected [`TemplateRenderer`]. Nothing here touches the filesystem.
//!
//! | Module | Template id | Output |
//! |--------|-------------|--------|
//! | [`action`] | `action.cs` | `Application/Actions/{Name}Action.cs` |
//! | [`aggregate`] | `aggregate.cs` | `Domain/Model/{Name}/{Name}.cs` |
//! | [`aggregate_migrator`] | `aggregate_migrator.cs` | `.../Repository/Migration/{Name}Migrator.cs` |
//! | [`command`] | `command.cs` | `Application/Actions/Commands/{Name}Command.cs` |
//! | [`entity_id`] | `entity_id.cs` | `Domain/Model/[{Entity}/]{Name}.cs` |
//! | [`http_bb_translator`] | `http_bb_translator.cs` | `.../Http/Common/Translation/{Name}Translator.cs` |
//! | [`http_command_translator`] | `command_translator.cs` | `.../Http/{V}/Translation/Commands/{Name}CommandTranslator.cs` |
//! | [`http_command`] | `http_adapter_command.cs` | `.../Http/{V}/Model/Commands/{Name}Command_{V}.cs` |
//! | [`endpoint`] | `endpoint.cs` | `.../Http/{V}/HttpAdapter.cs` |

pub mod action;
pub mod aggregate;
pub mod aggregate_migrator;
pub mod command;
pub mod endpoint;
pub mod entity_id;
pub mod http_bb_translator;
pub mod http_command;
pub mod http_command_translator;

use std::path::Path;

use tracing::debug;

use crate::application::ports::TemplateRenderer;
use crate::domain::{Artifact, ArtifactKind, Param, RenderContext};
use crate::error::GenResult;

/// Root of all HTTP adapter output.
pub(crate) const HTTP_ADAPTER_DIR: &str = "Infrastructure/Ports/Adapters/Http";

/// Indentation between generated class members.
pub(crate) const MEMBER_SEPARATOR: &str = "\n        ";

/// Every template id the renderer must be able to resolve.
pub const TEMPLATE_IDS: [&str; 9] = [
    action::TEMPLATE_ID,
    aggregate::TEMPLATE_ID,
    aggregate_migrator::TEMPLATE_ID,
    command::TEMPLATE_ID,
    entity_id::TEMPLATE_ID,
    http_bb_translator::TEMPLATE_ID,
    http_command_translator::TEMPLATE_ID,
    http_command::TEMPLATE_ID,
    endpoint::TEMPLATE_ID,
];

/// `public {type} {name} { get; set; }` for each param, one per line.
pub(crate) fn param_expressions(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| auto_property(&p.type_name, &p.name))
        .collect::<Vec<_>>()
        .join(MEMBER_SEPARATOR)
}

pub(crate) fn auto_property(type_name: &str, name: &str) -> String {
    format!("public {type_name} {name} {{ get; set; }}")
}

/// Render `template_id` and wrap the text as an artifact at `dir/file_name`.
pub(crate) fn render_artifact(
    renderer: &dyn TemplateRenderer,
    kind: ArtifactKind,
    template_id: &str,
    context: &RenderContext,
    dir: impl AsRef<Path>,
    file_name: String,
) -> GenResult<Artifact> {
    debug!(kind = %kind, template = template_id, vars = context.len(), "Rendering artifact");
    let source = renderer.render(template_id, context)?;
    Ok(Artifact::new(kind, source, dir, file_name))
}

/// Renderer that prints its context back, so tests can read the variables
/// a template received without a real template engine.
#[cfg(test)]
pub(crate) struct EchoRenderer;

#[cfg(test)]
impl TemplateRenderer for EchoRenderer {
    fn render(&self, template_id: &str, context: &RenderContext) -> GenResult<String> {
        let mut out = format!("#{template_id}\n");
        for (key, value) in context.variables() {
            out.push_str(&format!("{key}={value}\n"));
        }
        Ok(out)
    }
}
