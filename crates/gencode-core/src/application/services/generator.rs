//! Generator - one entry point per artifact kind.

use tracing::instrument;

use crate::application::ports::TemplateRenderer;
use crate::application::templates::{
    action, aggregate, aggregate_migrator, command, endpoint, entity_id, http_bb_translator,
    http_command, http_command_translator,
};
use crate::domain::{
    Action, Aggregate, ApiVersion, Artifact, Command, DomainError, Endpoint, EntityId,
    HttpBbTranslator, HttpCommand, HttpCommandTranslator,
};
use crate::error::GenResult;

/// Facade over the artifact templates, bound to one renderer.
#[derive(Clone, Copy)]
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    #[instrument(skip_all, fields(name = %definition.name))]
    pub fn gen_action(&self, definition: &Action) -> GenResult<Artifact> {
        action::render(self.renderer, definition)
    }

    #[instrument(skip_all, fields(name = %definition.name))]
    pub fn gen_aggregate(&self, definition: &Aggregate) -> GenResult<Artifact> {
        aggregate::render(self.renderer, definition)
    }

    #[instrument(skip_all, fields(name = %definition.name))]
    pub fn gen_aggregate_migrator(&self, definition: &Aggregate) -> GenResult<Artifact> {
        aggregate_migrator::render(self.renderer, definition)
    }

    #[instrument(skip_all, fields(name = %definition.name))]
    pub fn gen_command(&self, definition: &Command) -> GenResult<Artifact> {
        command::render(self.renderer, definition)
    }

    #[instrument(skip_all, fields(name = %definition.name))]
    pub fn gen_entity_id(&self, definition: &EntityId) -> GenResult<Artifact> {
        entity_id::render(self.renderer, definition)
    }

    #[instrument(skip_all, fields(name = %definition.name))]
    pub fn gen_http_bb_translator(&self, definition: &HttpBbTranslator) -> GenResult<Artifact> {
        http_bb_translator::render(self.renderer, definition)
    }

    #[instrument(skip_all, fields(name = %definition.name, version = %definition.version))]
    pub fn gen_http_command(&self, definition: &HttpCommand) -> GenResult<Artifact> {
        http_command::render(self.renderer, definition)
    }

    /// Translator for `command`, at the translator's declared version or,
    /// for an unversioned translator, at `version`.
    #[instrument(skip_all, fields(name = %translator.name))]
    pub fn gen_http_command_translator(
        &self,
        command: &Command,
        translator: &HttpCommandTranslator,
        version: Option<ApiVersion>,
    ) -> GenResult<Artifact> {
        let version = translator
            .version
            .or(version)
            .ok_or_else(|| DomainError::MissingApiVersion {
                name: translator.name.clone(),
            })?;
        http_command_translator::render(self.renderer, command, translator, version)
    }

    #[instrument(skip_all, fields(name = %definition.name, version = %definition.version))]
    pub fn gen_http_endpoint(&self, definition: &Endpoint) -> GenResult<Artifact> {
        endpoint::render(self.renderer, definition)
    }
}
