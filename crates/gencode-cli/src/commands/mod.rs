//! Command handlers, one module per subcommand.

pub mod completions;
pub mod generate;
pub mod init;
pub mod list;

use tracing::info;

use gencode_adapters::{DefinitionLoader, JinjaRenderer, LocalFilesystem};
use gencode_core::prelude::GenerateService;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    prompt::StdinPrompt,
};

/// Parse the configured definition file and wire the production adapters.
pub fn load_service(config: &AppConfig) -> CliResult<GenerateService> {
    let definitions = &config.paths.definitions;
    if !definitions.is_file() {
        return Err(CliError::DefinitionFileNotFound {
            path: definitions.clone(),
        });
    }

    let store = DefinitionLoader::new().parse(definitions)?;
    info!(
        definitions = %definitions.display(),
        count = store.len(),
        "Loaded definitions"
    );

    let renderer = match &config.paths.templates {
        Some(dir) => JinjaRenderer::with_templates_dir(dir),
        None => JinjaRenderer::new(),
    };

    Ok(GenerateService::new(
        store,
        Box::new(renderer),
        Box::new(LocalFilesystem::new()),
        Box::new(StdinPrompt),
        &config.paths.src,
    ))
}
