//! Insertion-ordered store of parsed definitions.

use crate::domain::{
    entities::definition::Definition,
    error::DomainError,
    value_objects::{ApiVersion, DefinitionKind},
};

/// All definitions parsed from one definition file, in file order.
///
/// Populated once by the loader, read-only afterwards. Each parse builds a
/// fresh store, so nothing leaks between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionStore {
    definitions: Vec<Definition>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition, keeping insertion order.
    pub fn add(&mut self, definition: impl Into<Definition>) {
        self.definitions.push(definition.into());
    }

    /// First definition of `kind` named `name` that answers `version`.
    ///
    /// Linear scan in insertion order; uniqueness is the loader's job.
    pub fn get(
        &self,
        kind: DefinitionKind,
        name: &str,
        version: Option<ApiVersion>,
    ) -> Option<&Definition> {
        self.definitions
            .iter()
            .filter(|d| d.kind() == kind)
            .filter(|d| d.name() == name)
            .find(|d| d.matches_version(version))
    }

    /// Like [`get`](Self::get), with the kind given by its string name.
    pub fn get_by_name(
        &self,
        kind: &str,
        name: &str,
        version: Option<ApiVersion>,
    ) -> Result<Option<&Definition>, DomainError> {
        let kind: DefinitionKind = kind.parse()?;
        Ok(self.get(kind, name, version))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter()
    }

    /// All definitions of one kind, in insertion order.
    pub fn of_kind(&self, kind: DefinitionKind) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(move |d| d.kind() == kind)
    }

    pub fn count(&self, kind: DefinitionKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::definition::{Action, Command, HttpCommand, Param};

    fn v(major: u32, minor: u32, patch: u32) -> Option<ApiVersion> {
        Some(ApiVersion::new(major, minor, patch))
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
        store.add(HttpCommand {
            name: "PlaceOrder".into(),
            version: ApiVersion::new(1, 0, 0),
            params: vec![Param::new("customerId", "string")],
        });
        store
    }

    #[test]
    fn lookup_filters_by_kind_then_name() {
        let store = sample_store();
        let found = store.get(DefinitionKind::Command, "PlaceOrder", None).unwrap();
        assert_eq!(found.kind(), DefinitionKind::Command);
        assert!(store.get(DefinitionKind::Command, "CancelOrder", None).is_none());
        assert!(store.get(DefinitionKind::Aggregate, "PlaceOrder", None).is_none());
    }

    #[test]
    fn versioned_lookup_misses_on_wrong_version() {
        let store = sample_store();
        assert!(store.get(DefinitionKind::HttpCommand, "PlaceOrder", v(1, 0, 0)).is_some());
        assert!(store.get(DefinitionKind::HttpCommand, "PlaceOrder", v(1, 1, 0)).is_none());
    }

    #[test]
    fn first_match_wins() {
        let mut store = DefinitionStore::new();
        store.add(Action {
            name: "Dup".into(),
            returns: Some("First".into()),
        });
        store.add(Action {
            name: "Dup".into(),
            returns: Some("Second".into()),
        });
        match store.get(DefinitionKind::Action, "Dup", None) {
            Some(Definition::Action(a)) => assert_eq!(a.returns.as_deref(), Some("First")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_string_fails() {
        let store = sample_store();
        assert!(matches!(
            store.get_by_name("widget", "PlaceOrder", None),
            Err(DomainError::UnknownKind { .. })
        ));
        assert!(store.get_by_name("action", "PlaceOrder", None).unwrap().is_some());
    }

    #[test]
    fn preserves_insertion_order() {
        let store = sample_store();
        let kinds: Vec<_> = store.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                DefinitionKind::Action,
                DefinitionKind::Command,
                DefinitionKind::HttpCommand
            ]
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.count(DefinitionKind::Command), 1);
    }
}
