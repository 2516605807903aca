//! Domain value objects: DefinitionKind, ArtifactKind, ApiVersion, HttpMethod.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Kinds
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the definition record in `entities/definition.rs`
//! 4. Add an artifact template in `application/templates`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DefinitionKind ────────────────────────────────────────────────────────────

/// The eight kinds of record a definition file can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Action,
    Aggregate,
    Command,
    EntityId,
    HttpBbTranslator,
    HttpCommandTranslator,
    HttpCommand,
    HttpEndpoint,
}

impl DefinitionKind {
    pub const ALL: [DefinitionKind; 8] = [
        Self::Action,
        Self::Aggregate,
        Self::Command,
        Self::EntityId,
        Self::HttpBbTranslator,
        Self::HttpCommandTranslator,
        Self::HttpCommand,
        Self::HttpEndpoint,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Aggregate => "aggregate",
            Self::Command => "command",
            Self::EntityId => "entity_id",
            Self::HttpBbTranslator => "http_bb_translator",
            Self::HttpCommandTranslator => "http_command_translator",
            Self::HttpCommand => "http_command",
            Self::HttpEndpoint => "http_endpoint",
        }
    }

    /// Whether the version takes part in this kind's identity.
    pub const fn is_versioned(self) -> bool {
        matches!(
            self,
            Self::HttpCommand | Self::HttpEndpoint | Self::HttpCommandTranslator
        )
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefinitionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::UnknownKind { kind: s.to_string() })
    }
}

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// The kinds of source file the generator can produce.
///
/// Mostly one per definition kind; an aggregate additionally yields a
/// repository migrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Action,
    Aggregate,
    AggregateMigrator,
    Command,
    EntityId,
    HttpBbTranslator,
    HttpCommandTranslator,
    HttpCommand,
    HttpEndpoint,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 9] = [
        Self::Action,
        Self::Aggregate,
        Self::AggregateMigrator,
        Self::Command,
        Self::EntityId,
        Self::HttpBbTranslator,
        Self::HttpCommandTranslator,
        Self::HttpCommand,
        Self::HttpEndpoint,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Aggregate => "aggregate",
            Self::AggregateMigrator => "aggregate_migrator",
            Self::Command => "command",
            Self::EntityId => "entity_id",
            Self::HttpBbTranslator => "http_bb_translator",
            Self::HttpCommandTranslator => "http_command_translator",
            Self::HttpCommand => "http_command",
            Self::HttpEndpoint => "http_endpoint",
        }
    }

    /// The definition an artifact of this kind is generated from.
    pub const fn definition_kind(self) -> DefinitionKind {
        match self {
            Self::Action => DefinitionKind::Action,
            Self::Aggregate | Self::AggregateMigrator => DefinitionKind::Aggregate,
            Self::Command => DefinitionKind::Command,
            Self::EntityId => DefinitionKind::EntityId,
            Self::HttpBbTranslator => DefinitionKind::HttpBbTranslator,
            Self::HttpCommandTranslator => DefinitionKind::HttpCommandTranslator,
            Self::HttpCommand => DefinitionKind::HttpCommand,
            Self::HttpEndpoint => DefinitionKind::HttpEndpoint,
        }
    }

    /// How a generated artifact of this kind leaves the process.
    ///
    /// Endpoints are merged by hand into the shared per-version adapter
    /// file, so they are printed instead of written.
    pub const fn delivery_mode(self) -> DeliveryMode {
        match self {
            Self::HttpEndpoint => DeliveryMode::Print,
            _ => DeliveryMode::Write,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::UnknownKind { kind: s.to_string() })
    }
}

/// Where an artifact goes once rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Written under the source root, with overwrite confirmation.
    Write,
    /// Printed to standard output.
    Print,
}

// ── ApiVersion ────────────────────────────────────────────────────────────────

/// A `MAJOR.MINOR.PATCH` HTTP API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Token used in paths, namespaces and class-name suffixes: `v1_0_0`.
    pub fn token(&self) -> String {
        format!("v{}_{}_{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ApiVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidApiVersion {
            value: s.to_string(),
        };

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── HttpMethod ────────────────────────────────────────────────────────────────

/// HTTP methods an endpoint may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Resolve an endpoint's declared method, case-insensitively.
    pub fn for_endpoint(endpoint: &str, method: &str) -> Result<Self, DomainError> {
        match method.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            _ => Err(DomainError::UnsupportedMethod {
                endpoint: endpoint.to_string(),
                method: method.to_string(),
            }),
        }
    }

    /// Routing attribute placed on the adapter method.
    pub const fn verb_attribute(self) -> &'static str {
        match self {
            Self::Get => "HttpGet",
            Self::Post => "HttpPost",
            Self::Put => "HttpPut",
            Self::Delete => "HttpDelete",
        }
    }

    /// Where the command parameter is bound from.
    pub const fn param_location(self) -> &'static str {
        match self {
            Self::Post => "FromBody",
            _ => "FromQuery",
        }
    }
}
