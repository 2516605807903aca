//! Definition records parsed from the definition file.
//!
//! Every record is immutable once built. [`Definition`] is the closed set of
//! records the store holds; lookups and generation dispatch match on it
//! exhaustively.

use serde::Serialize;

use crate::domain::value_objects::{ApiVersion, DefinitionKind};

/// A named, typed command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub type_name: String,
}

impl Param {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A named, typed aggregate property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub type_name: String,
}

impl Property {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// An application action. Always paired with a [`Command`] of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub name: String,
    pub returns: Option<String>,
}

/// An aggregate root. Always paired with an [`EntityId`] named `{name}Id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub name: String,
    pub properties: Vec<Property>,
}

impl Aggregate {
    /// Name of the identity type this aggregate implies.
    pub fn id_name(&self) -> String {
        format!("{}Id", self.name)
    }

    /// The identity record implied by this aggregate.
    pub fn entity_id(&self) -> EntityId {
        EntityId {
            name: self.id_name(),
            entity_name: self.name.clone(),
            entity_is_aggregate: true,
        }
    }
}

/// The input of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: String,
    pub params: Vec<Param>,
}

/// An identity value type owned by an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityId {
    pub name: String,
    pub entity_name: String,
    pub entity_is_aggregate: bool,
}

/// A translator between a domain building block and its HTTP model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpBbTranslator {
    pub name: String,
}

/// A translator from a versioned HTTP command to the application command.
///
/// `version == None` means the translator was declared without a version and
/// serves whichever version it is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpCommandTranslator {
    pub name: String,
    pub version: Option<ApiVersion>,
}

/// The wire representation of a command for one API version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpCommand {
    pub name: String,
    pub version: ApiVersion,
    pub params: Vec<Param>,
}

/// A versioned HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub name: String,
    pub version: ApiVersion,
    /// Raw method string; resolved (and rejected if unsupported) at generation.
    pub method: String,
    pub returns: Option<String>,
    pub doc_attributes: Vec<String>,
    pub doc_section: String,
    pub doc_desc: String,
    pub doc_returns: String,
}

/// Any record the definition store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Definition {
    Action(Action),
    Aggregate(Aggregate),
    Command(Command),
    EntityId(EntityId),
    HttpBbTranslator(HttpBbTranslator),
    HttpCommandTranslator(HttpCommandTranslator),
    HttpCommand(HttpCommand),
    HttpEndpoint(Endpoint),
}

impl Definition {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Action(_) => DefinitionKind::Action,
            Self::Aggregate(_) => DefinitionKind::Aggregate,
            Self::Command(_) => DefinitionKind::Command,
            Self::EntityId(_) => DefinitionKind::EntityId,
            Self::HttpBbTranslator(_) => DefinitionKind::HttpBbTranslator,
            Self::HttpCommandTranslator(_) => DefinitionKind::HttpCommandTranslator,
            Self::HttpCommand(_) => DefinitionKind::HttpCommand,
            Self::HttpEndpoint(_) => DefinitionKind::HttpEndpoint,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Action(d) => &d.name,
            Self::Aggregate(d) => &d.name,
            Self::Command(d) => &d.name,
            Self::EntityId(d) => &d.name,
            Self::HttpBbTranslator(d) => &d.name,
            Self::HttpCommandTranslator(d) => &d.name,
            Self::HttpCommand(d) => &d.name,
            Self::HttpEndpoint(d) => &d.name,
        }
    }

    /// The API version, for the records that carry one.
    pub fn version(&self) -> Option<ApiVersion> {
        match self {
            Self::HttpCommandTranslator(d) => d.version,
            Self::HttpCommand(d) => Some(d.version),
            Self::HttpEndpoint(d) => Some(d.version),
            _ => None,
        }
    }

    /// Whether this record answers a lookup for `version`.
    ///
    /// Unversioned kinds ignore the requested version, a `None` request
    /// matches any version, and an unversioned command translator matches
    /// every request.
    pub fn matches_version(&self, version: Option<ApiVersion>) -> bool {
        if !self.kind().is_versioned() {
            return true;
        }
        match (version, self.version()) {
            (None, _) | (_, None) => true,
            (Some(wanted), Some(own)) => wanted == own,
        }
    }
}

macro_rules! impl_from_record {
    ($($record:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$record> for Definition {
                fn from(record: $record) -> Self {
                    Self::$variant(record)
                }
            }
        )*
    };
}

impl_from_record!(
    Action => Action,
    Aggregate => Aggregate,
    Command => Command,
    EntityId => EntityId,
    HttpBbTranslator => HttpBbTranslator,
    HttpCommandTranslator => HttpCommandTranslator,
    HttpCommand => HttpCommand,
    Endpoint => HttpEndpoint,
);
