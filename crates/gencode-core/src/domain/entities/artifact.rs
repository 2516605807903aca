//! Rendered artifacts and the variables they are rendered from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ArtifactKind;

/// One generated source file.
///
/// `path` is relative to the configured source root; the orchestrator
/// resolves it when writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub source: String,
    pub file_name: String,
    pub path: PathBuf,
}

impl Artifact {
    /// Build an artifact whose path is `dir/file_name`.
    pub fn new(
        kind: ArtifactKind,
        source: String,
        dir: impl AsRef<Path>,
        file_name: impl Into<String>,
    ) -> Self {
        let file_name = file_name.into();
        let path = dir.as_ref().join(&file_name);
        Self {
            kind,
            source,
            file_name,
            path,
        }
    }
}

/// Flat variable mapping handed to the template renderer.
///
/// A **Value Object**: built once per artifact with [`with_variable`](Self::with_variable)
/// and never mutated after being passed to a renderer. Sorted so that debug
/// output and snapshot-style assertions are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning the extended context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_path_joins_dir_and_file_name() {
        let artifact = Artifact::new(
            ArtifactKind::Action,
            String::new(),
            "Application/Actions",
            "PlaceOrderAction.cs",
        );
        assert_eq!(artifact.path, PathBuf::from("Application/Actions/PlaceOrderAction.cs"));
        assert_eq!(artifact.file_name, "PlaceOrderAction.cs");
    }

    #[test]
    fn later_variables_override_earlier_ones() {
        let ctx = RenderContext::new()
            .with_variable("class_name", "A")
            .with_variable("class_name", "B");
        assert_eq!(ctx.get("class_name"), Some("B"));
        assert_eq!(ctx.len(), 1);
    }
}
