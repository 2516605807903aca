//! Generate Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Resolve the request against the definition store
//! 2. Render the artifact through the generator
//! 3. Deliver it: write under the source root, or hand it back for printing

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, OverwritePrompt, TemplateRenderer},
        services::Generator,
    },
    domain::{
        ApiVersion, Artifact, ArtifactKind, Command, Definition, DefinitionKind,
        DefinitionStore, DeliveryMode,
    },
    error::GenResult,
};

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub kind: ArtifactKind,
    pub name: String,
    pub version: Option<ApiVersion>,
}

impl GenerateRequest {
    pub fn new(kind: ArtifactKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }
}

/// Outcome of delivering one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Written to this path.
    Written(PathBuf),
    /// Target existed and the user declined to overwrite it.
    Kept(PathBuf),
    /// Not written; the caller prints the artifact for manual merging.
    Print(Artifact),
}

/// One line of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionSummary {
    pub kind: DefinitionKind,
    pub name: String,
    pub version: Option<ApiVersion>,
}

/// Generation orchestrator.
pub struct GenerateService {
    store: DefinitionStore,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    prompt: Box<dyn OverwritePrompt>,
    src_root: PathBuf,
}

impl GenerateService {
    /// Create a new generate service over a parsed store and injected adapters.
    pub fn new(
        store: DefinitionStore,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        prompt: Box<dyn OverwritePrompt>,
        src_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            prompt,
            src_root: src_root.into(),
        }
    }

    pub fn store(&self) -> &DefinitionStore {
        &self.store
    }

    fn generator(&self) -> Generator<'_> {
        Generator::new(self.renderer.as_ref())
    }

    /// Resolve a request and render its artifact.
    #[instrument(
        skip_all,
        fields(kind = %request.kind, name = %request.name, version = ?request.version)
    )]
    pub fn generate(&self, request: &GenerateRequest) -> GenResult<Artifact> {
        let generator = self.generator();
        let definition = self.lookup(
            request.kind.definition_kind(),
            &request.name,
            request.version,
        )?;

        let artifact = match (request.kind, definition) {
            (ArtifactKind::Action, Definition::Action(d)) => generator.gen_action(d),
            (ArtifactKind::Aggregate, Definition::Aggregate(d)) => generator.gen_aggregate(d),
            (ArtifactKind::AggregateMigrator, Definition::Aggregate(d)) => {
                generator.gen_aggregate_migrator(d)
            }
            (ArtifactKind::Command, Definition::Command(d)) => generator.gen_command(d),
            (ArtifactKind::EntityId, Definition::EntityId(d)) => generator.gen_entity_id(d),
            (ArtifactKind::HttpBbTranslator, Definition::HttpBbTranslator(d)) => {
                generator.gen_http_bb_translator(d)
            }
            (ArtifactKind::HttpCommandTranslator, Definition::HttpCommandTranslator(t)) => {
                let command = self.command_for(&t.name)?;
                generator.gen_http_command_translator(command, t, request.version)
            }
            (ArtifactKind::HttpCommand, Definition::HttpCommand(d)) => {
                generator.gen_http_command(d)
            }
            (ArtifactKind::HttpEndpoint, Definition::HttpEndpoint(d)) => {
                generator.gen_http_endpoint(d)
            }
            (kind, other) => {
                return Err(crate::error::GenError::Internal {
                    message: format!("{} lookup returned a {}", kind, other.kind()),
                });
            }
        }?;

        debug!(path = %artifact.path.display(), "Artifact rendered");
        Ok(artifact)
    }

    /// Write or hand back one artifact.
    ///
    /// An existing file is replaced only when the prompt says yes;
    /// otherwise it is left untouched.
    #[instrument(skip_all, fields(kind = %artifact.kind, path = %artifact.path.display()))]
    pub fn deliver(&self, artifact: Artifact) -> GenResult<Delivery> {
        if artifact.kind.delivery_mode() == DeliveryMode::Print {
            return Ok(Delivery::Print(artifact));
        }

        let target = self.src_root.join(&artifact.path);

        if self.filesystem.exists(&target) && !self.prompt.confirm_overwrite(&target)? {
            info!(path = %target.display(), "Keeping existing file");
            return Ok(Delivery::Kept(target));
        }

        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem
            .write_file(&target, &format!("{}\n", artifact.source))?;

        info!(path = %target.display(), "Wrote artifact");
        Ok(Delivery::Written(target))
    }

    /// Generate and deliver a single request.
    pub fn run(&self, request: &GenerateRequest) -> GenResult<Delivery> {
        let artifact = self.generate(request)?;
        self.deliver(artifact)
    }

    /// Generate and deliver every artifact the store implies, in store order.
    ///
    /// Every artifact is rendered before anything is written, so a failing
    /// definition leaves the source tree untouched. Aggregates yield both the
    /// aggregate and its migrator. Translators without a declared version are
    /// skipped, since there is no version to bind them to.
    #[instrument(skip_all, fields(definitions = self.store.len()))]
    pub fn generate_all(&self) -> GenResult<Vec<Delivery>> {
        let artifacts = self.render_all()?;
        debug!(count = artifacts.len(), "All artifacts rendered");

        let deliveries = artifacts
            .into_iter()
            .map(|artifact| self.deliver(artifact))
            .collect::<GenResult<Vec<_>>>()?;

        info!(count = deliveries.len(), "Generated all artifacts");
        Ok(deliveries)
    }

    /// Summaries of every definition, in store order.
    pub fn list(&self) -> Vec<DefinitionSummary> {
        self.store
            .iter()
            .map(|d| DefinitionSummary {
                kind: d.kind(),
                name: d.name().to_string(),
                version: d.version(),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn lookup(
        &self,
        kind: DefinitionKind,
        name: &str,
        version: Option<ApiVersion>,
    ) -> GenResult<&Definition> {
        self.store.get(kind, name, version).ok_or_else(|| {
            ApplicationError::DefinitionNotFound {
                kind: kind.to_string(),
                name: name.to_string(),
                version: version.map(|v| v.to_string()),
            }
            .into()
        })
    }

    fn render_all(&self) -> GenResult<Vec<Artifact>> {
        let generator = self.generator();
        let mut artifacts = Vec::with_capacity(self.store.len());

        for definition in self.store.iter() {
            match definition {
                Definition::Action(d) => artifacts.push(generator.gen_action(d)?),
                Definition::Aggregate(d) => {
                    artifacts.push(generator.gen_aggregate(d)?);
                    artifacts.push(generator.gen_aggregate_migrator(d)?);
                }
                Definition::Command(d) => artifacts.push(generator.gen_command(d)?),
                Definition::EntityId(d) => artifacts.push(generator.gen_entity_id(d)?),
                Definition::HttpBbTranslator(d) => {
                    artifacts.push(generator.gen_http_bb_translator(d)?)
                }
                Definition::HttpCommandTranslator(t) => {
                    if t.version.is_none() {
                        warn!(
                            name = %t.name,
                            "Skipping command translator without a Version; generate it with an explicit version"
                        );
                        continue;
                    }
                    let command = self.command_for(&t.name)?;
                    artifacts.push(generator.gen_http_command_translator(command, t, None)?);
                }
                Definition::HttpCommand(d) => artifacts.push(generator.gen_http_command(d)?),
                Definition::HttpEndpoint(d) => artifacts.push(generator.gen_http_endpoint(d)?),
            }
        }

        Ok(artifacts)
    }

    fn command_for(&self, name: &str) -> GenResult<&Command> {
        match self.lookup(DefinitionKind::Command, name, None)? {
            Definition::Command(c) => Ok(c),
            other => Err(crate::error::GenError::Internal {
                message: format!("command lookup returned a {}", other.kind()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockOverwritePrompt};
    use crate::application::templates::EchoRenderer;
    use crate::domain::{
        Action, Aggregate, Endpoint, HttpCommand, HttpCommandTranslator, Param, Property,
    };
    use crate::error::{ErrorCategory, GenError};
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    /// Filesystem double that records writes in a map.
    #[derive(Default, Clone)]
    struct RecordingFs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
    }

    impl Filesystem for RecordingFs {
        fn create_dir_all(&self, _path: &Path) -> GenResult<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> GenResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn read_file(&self, path: &Path) -> GenResult<String> {
            Ok(self.files.lock().unwrap()[path].clone())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    struct Answer(bool);

    impl OverwritePrompt for Answer {
        fn confirm_overwrite(&self, _path: &Path) -> GenResult<bool> {
            Ok(self.0)
        }
    }

    fn sample_store() -> DefinitionStore {
        let mut store = DefinitionStore::new();
        store.add(Action {
            name: "PlaceOrder".into(),
            returns: Some("OrderId".into()),
        });
        store.add(Command {
            name: "PlaceOrder".into(),
            params: vec![Param::new("customerId", "Guid")],
        });
        store.add(Endpoint {
            name: "PlaceOrder".into(),
            version: ApiVersion::new(1, 0, 0),
            method: "post".into(),
            returns: None,
            doc_attributes: vec![],
            doc_section: "Orders".into(),
            doc_desc: "Place an order.".into(),
            doc_returns: "Nothing.".into(),
        });
        store.add(HttpCommand {
            name: "PlaceOrder".into(),
            version: ApiVersion::new(1, 0, 0),
            params: vec![Param::new("customerId", "string")],
        });
        store.add(HttpCommandTranslator {
            name: "PlaceOrder".into(),
            version: Some(ApiVersion::new(1, 0, 0)),
        });
        store.add(HttpCommandTranslator {
            name: "CancelOrder".into(),
            version: None,
        });
        let order = Aggregate {
            name: "Order".into(),
            properties: vec![Property::new("Status", "OrderStatus")],
        };
        store.add(order.entity_id());
        store.add(order);
        store
    }

    fn service(fs: RecordingFs, overwrite: bool) -> GenerateService {
        GenerateService::new(
            sample_store(),
            Box::new(EchoRenderer),
            Box::new(fs),
            Box::new(Answer(overwrite)),
            "/src",
        )
    }

    #[test]
    fn run_writes_under_the_source_root_with_trailing_newline() {
        let fs = RecordingFs::default();
        let svc = service(fs.clone(), false);

        let delivery = svc
            .run(&GenerateRequest::new(ArtifactKind::Action, "PlaceOrder"))
            .unwrap();

        let expected = PathBuf::from("/src/Application/Actions/PlaceOrderAction.cs");
        assert_eq!(delivery, Delivery::Written(expected.clone()));
        let written = fs.read_file(&expected).unwrap();
        assert!(written.ends_with('\n'));
        assert!(written.contains("return_class_name=OrderId"));
    }

    #[test]
    fn declined_overwrite_leaves_file_untouched() {
        let fs = RecordingFs::default();
        let target = PathBuf::from("/src/Application/Actions/PlaceOrderAction.cs");
        fs.write_file(&target, "hand edited").unwrap();
        let svc = service(fs.clone(), false);

        let delivery = svc
            .run(&GenerateRequest::new(ArtifactKind::Action, "PlaceOrder"))
            .unwrap();

        assert_eq!(delivery, Delivery::Kept(target.clone()));
        assert_eq!(fs.read_file(&target).unwrap(), "hand edited");
    }

    #[test]
    fn accepted_overwrite_replaces_file() {
        let fs = RecordingFs::default();
        let target = PathBuf::from("/src/Application/Actions/PlaceOrderAction.cs");
        fs.write_file(&target, "hand edited").unwrap();
        let svc = service(fs.clone(), true);

        let delivery = svc
            .run(&GenerateRequest::new(ArtifactKind::Action, "PlaceOrder"))
            .unwrap();

        assert_eq!(delivery, Delivery::Written(target.clone()));
        assert_ne!(fs.read_file(&target).unwrap(), "hand edited");
    }

    #[test]
    fn prompt_is_not_consulted_for_new_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let mut prompt = MockOverwritePrompt::new();
        prompt.expect_confirm_overwrite().never();

        let svc = GenerateService::new(
            sample_store(),
            Box::new(EchoRenderer),
            Box::new(fs),
            Box::new(prompt),
            "/src",
        );
        svc.run(&GenerateRequest::new(ArtifactKind::Command, "PlaceOrder"))
            .unwrap();
    }

    #[test]
    fn endpoints_are_printed_never_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_exists().never();

        let svc = GenerateService::new(
            sample_store(),
            Box::new(EchoRenderer),
            Box::new(fs),
            Box::new(Answer(true)),
            "/src",
        );
        let delivery = svc
            .run(&GenerateRequest::new(ArtifactKind::HttpEndpoint, "PlaceOrder"))
            .unwrap();

        match delivery {
            Delivery::Print(artifact) => assert_eq!(artifact.kind, ArtifactKind::HttpEndpoint),
            other => panic!("expected Print, got {other:?}"),
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        let svc = service(RecordingFs::default(), false);
        let err = svc
            .generate(&GenerateRequest::new(ArtifactKind::Action, "Nope"))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(matches!(
            err,
            GenError::Application(ApplicationError::DefinitionNotFound { ref kind, .. }) if kind == "action"
        ));
    }

    #[test]
    fn wrong_version_is_not_found() {
        let svc = service(RecordingFs::default(), false);
        let request = GenerateRequest::new(ArtifactKind::HttpCommand, "PlaceOrder")
            .with_version(ApiVersion::new(2, 0, 0));
        assert!(matches!(
            svc.generate(&request),
            Err(GenError::Application(ApplicationError::DefinitionNotFound { .. }))
        ));
    }

    #[test]
    fn translator_needs_its_command() {
        let svc = service(RecordingFs::default(), false);
        let request = GenerateRequest::new(ArtifactKind::HttpCommandTranslator, "CancelOrder")
            .with_version(ApiVersion::new(1, 0, 0));
        let err = svc.generate(&request).unwrap_err();
        assert!(matches!(
            err,
            GenError::Application(ApplicationError::DefinitionNotFound { ref kind, .. }) if kind == "command"
        ));
    }

    #[test]
    fn migrator_is_generated_from_the_aggregate() {
        let svc = service(RecordingFs::default(), false);
        let artifact = svc
            .generate(&GenerateRequest::new(ArtifactKind::AggregateMigrator, "Order"))
            .unwrap();
        assert_eq!(artifact.file_name, "OrderMigrator.cs");
    }

    #[test]
    fn generate_all_writes_files_prints_endpoints_and_skips_unversioned_translators() {
        let fs = RecordingFs::default();
        let svc = service(fs.clone(), false);

        let deliveries = svc.generate_all().unwrap();

        let written = deliveries
            .iter()
            .filter(|d| matches!(d, Delivery::Written(_)))
            .count();
        let printed = deliveries
            .iter()
            .filter(|d| matches!(d, Delivery::Print(_)))
            .count();
        // action, command, http command, translator, entity id, aggregate, migrator
        assert_eq!(written, 7);
        assert_eq!(printed, 1);
        assert!(!fs.exists(Path::new(
            "/src/Infrastructure/Ports/Adapters/Http/v1_0_0/Translation/Commands/CancelOrderCommandTranslator.cs"
        )));
        assert!(fs.exists(Path::new(
            "/src/Infrastructure/Ports/Adapters/Http/v1_0_0/Translation/Commands/PlaceOrderCommandTranslator.cs"
        )));
    }

    #[test]
    fn list_reports_kind_name_and_version_in_store_order() {
        let svc = service(RecordingFs::default(), false);
        let summaries = svc.list();
        assert_eq!(summaries.len(), svc.store().len());
        assert_eq!(summaries[0].kind, DefinitionKind::Action);
        assert_eq!(summaries[2].version, Some(ApiVersion::new(1, 0, 0)));
        assert_eq!(summaries[5].version, None);
    }
}
