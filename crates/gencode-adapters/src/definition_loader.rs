//! YAML definition file loader.
//!
//! Parses a definition file into a fresh [`DefinitionStore`] in a single
//! top-to-bottom pass:
//!
//! 1. `Actions`: each entry yields an [`Action`] followed by its [`Command`]
//! 2. `Adapters.Http`: version keys (`1.0.0`) yield an [`Endpoint`] and an
//!    [`HttpCommand`] per endpoint; `BuildingBlockTranslators` and
//!    `CommandTranslators` yield translators; any other key is skipped
//! 3. `Aggregates`: each entry yields an [`Aggregate`] followed by its
//!    [`EntityId`](gencode_core::domain::EntityId)
//!
//! # File format
//!
//! ```yaml
//! Actions:
//!   - Name: PlaceOrder
//!     Returns: OrderId
//!     Command:
//!       Params: { customerId: Guid }
//! Adapters:
//!   Http:
//!     1.0.0:
//!       Endpoints:
//!         - Name: PlaceOrder
//!           Method: post
//!           DocSection: Orders
//!           DocDesc: Place an order.
//!           DocReturns: The order id.
//!           Command:
//!             Params: { customerId: string }
//!     BuildingBlockTranslators:
//!       - Name: Order
//!     CommandTranslators:
//!       - Name: PlaceOrder
//!         Version: 1.0.0
//! Aggregates:
//!   - Name: Order
//!     Properties: { Status: OrderStatus }
//! ```
//!
//! Absent top-level sections are treated as empty. Param and property maps
//! keep their file order.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, info, instrument};

use gencode_core::{
    domain::{
        Action, Aggregate, ApiVersion, Command, DefinitionStore, DomainError, Endpoint,
        HttpBbTranslator, HttpCommand, HttpCommandTranslator, Param, Property,
        naming::is_http_version_key,
    },
    error::GenResult,
};

use crate::filesystem::map_io_error;

const BUILDING_BLOCK_TRANSLATORS: &str = "BuildingBlockTranslators";
const COMMAND_TRANSLATORS: &str = "CommandTranslators";

// ── File schema ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DefinitionFile {
    #[serde(default)]
    actions: Option<Vec<ActionEntry>>,
    #[serde(default)]
    adapters: Option<AdaptersSection>,
    #[serde(default)]
    aggregates: Option<Vec<AggregateEntry>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AdaptersSection {
    /// Mixed keys: versions and the two translator lists.
    #[serde(default)]
    http: Option<Mapping>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ActionEntry {
    name: String,
    #[serde(default)]
    returns: Option<String>,
    command: CommandEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CommandEntry {
    params: IndexMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VersionBlock {
    #[serde(default)]
    endpoints: Vec<EndpointEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EndpointEntry {
    name: String,
    method: String,
    #[serde(default)]
    returns: Option<String>,
    #[serde(default)]
    swagger_doc_defs: Vec<String>,
    doc_section: String,
    doc_desc: String,
    doc_returns: String,
    command: CommandEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NamedEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TranslatorEntry {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AggregateEntry {
    name: String,
    properties: IndexMap<String, String>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Reads definition files into a [`DefinitionStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionLoader;

impl DefinitionLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the definition file at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn parse(&self, path: impl AsRef<Path>) -> GenResult<DefinitionStore> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| map_io_error(path, e, "read definition file"))?;
        self.parse_str(&source, &path.display().to_string())
    }

    /// Parse definition YAML held in memory. `source_name` only labels errors.
    pub fn parse_str(&self, source: &str, source_name: &str) -> GenResult<DefinitionStore> {
        let format_error = |reason: String| DomainError::DefinitionFormat {
            source_name: source_name.to_string(),
            reason,
        };

        let file: DefinitionFile = if source.trim().is_empty() {
            DefinitionFile::default()
        } else {
            serde_yaml::from_str(source).map_err(|e| format_error(e.to_string()))?
        };

        let mut store = DefinitionStore::new();

        for entry in file.actions.unwrap_or_default() {
            add_action(&mut store, entry);
        }

        let http = file.adapters.and_then(|a| a.http).unwrap_or_default();
        for (key, value) in http {
            let key = match key {
                Value::String(key) => key,
                other => {
                    debug!(key = ?other, "Skipping non-string key under Adapters.Http");
                    continue;
                }
            };

            if is_http_version_key(&key) {
                let version: ApiVersion = key.parse()?;
                let block: VersionBlock = from_section(value, &key, &format_error)?;
                for endpoint in block.endpoints {
                    add_endpoint(&mut store, endpoint, version);
                }
            } else if key == BUILDING_BLOCK_TRANSLATORS {
                let entries: Vec<NamedEntry> = from_section(value, &key, &format_error)?;
                for entry in entries {
                    store.add(HttpBbTranslator { name: entry.name });
                }
            } else if key == COMMAND_TRANSLATORS {
                let entries: Vec<TranslatorEntry> = from_section(value, &key, &format_error)?;
                for entry in entries {
                    let version = entry
                        .version
                        .as_deref()
                        .map(str::parse::<ApiVersion>)
                        .transpose()?;
                    store.add(HttpCommandTranslator {
                        name: entry.name,
                        version,
                    });
                }
            } else {
                debug!(key = %key, "Skipping unrecognised key under Adapters.Http");
            }
        }

        for entry in file.aggregates.unwrap_or_default() {
            let aggregate = Aggregate {
                name: entry.name,
                properties: entry
                    .properties
                    .into_iter()
                    .map(|(name, type_name)| Property::new(name, type_name))
                    .collect(),
            };
            let id = aggregate.entity_id();
            store.add(aggregate);
            store.add(id);
        }

        info!(definitions = store.len(), source = source_name, "Parsed definitions");
        Ok(store)
    }
}

fn add_action(store: &mut DefinitionStore, entry: ActionEntry) {
    store.add(Action {
        name: entry.name.clone(),
        returns: entry.returns,
    });
    store.add(Command {
        name: entry.name,
        params: params(entry.command),
    });
}

fn add_endpoint(store: &mut DefinitionStore, entry: EndpointEntry, version: ApiVersion) {
    store.add(Endpoint {
        name: entry.name.clone(),
        version,
        method: entry.method,
        returns: entry.returns,
        doc_attributes: entry.swagger_doc_defs,
        doc_section: entry.doc_section,
        doc_desc: entry.doc_desc,
        doc_returns: entry.doc_returns,
    });
    store.add(HttpCommand {
        name: entry.name,
        version,
        params: params(entry.command),
    });
}

fn params(command: CommandEntry) -> Vec<Param> {
    command
        .params
        .into_iter()
        .map(|(name, type_name)| Param::new(name, type_name))
        .collect()
}

/// Deserialize one `Adapters.Http` section, labelling errors with its key.
fn from_section<T: serde::de::DeserializeOwned>(
    value: Value,
    key: &str,
    format_error: &impl Fn(String) -> DomainError,
) -> Result<T, DomainError> {
    serde_yaml::from_value(value).map_err(|e| format_error(format!("Adapters.Http.{key}: {e}")))
}
