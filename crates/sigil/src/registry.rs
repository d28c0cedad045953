//! Documentation registry and reference resolution
//!
//! The registry is the root entity tree produced by an external
//! declaration-to-AST extractor: a nested `module` mapping from name to
//! entity, where each entity may be an interface, a namespace, a function, or
//! any combination. It is read-only to the rendering core and is threaded
//! explicitly into every call that needs it; there is no ambient global
//! documentation tree.
//!
//! Reference resolution is a pure lookup: walking a qualified path one
//! segment at a time, with any miss yielding `None` (and therefore an
//! unlinked rendering, never an error).

use crate::diagnostics::SigilResult;
use crate::interface::{FunctionDef, InterfaceDef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A documented entity: interface, namespace, function, or a combination
///
/// Entities combine freely; `Map` for example carries an interface, a
/// constructor call signature and a nested namespace of static functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocEntity {
    /// Free-text synopsis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Interface definition, when this entity documents a type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceDef>,

    /// Call signatures, when this entity is callable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<FunctionDef>,

    /// Nested entities, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub module: IndexMap<String, DocEntity>,
}

impl DocEntity {
    /// Create an entity documenting an interface
    pub fn interface(def: InterfaceDef) -> Self {
        Self {
            interface: Some(def),
            ..Default::default()
        }
    }

    /// Create an entity documenting a function
    pub fn function(def: FunctionDef) -> Self {
        Self {
            call: Some(def),
            ..Default::default()
        }
    }

    /// Add a nested entity
    pub fn with_nested(mut self, name: impl Into<String>, entity: DocEntity) -> Self {
        self.module.insert(name.into(), entity);
        self
    }
}

/// The root documentation tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    /// Version of the documented library
    #[serde(default)]
    pub version: String,

    /// Top-level entities, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub module: IndexMap<String, DocEntity>,
}

impl Registry {
    /// Create an empty registry
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            module: IndexMap::new(),
        }
    }

    /// Add a top-level entity
    pub fn with_entity(mut self, name: impl Into<String>, entity: DocEntity) -> Self {
        self.module.insert(name.into(), entity);
        self
    }

    /// Load a registry from a JSON defs string
    pub fn from_json(json: &str) -> SigilResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a registry from a JSON defs file
    pub fn from_json_file(path: impl AsRef<Path>) -> SigilResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Resolve a qualified path, one segment at a time
    ///
    /// Returns `None` as soon as any segment is absent.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&DocEntity> {
        let mut segments = path.iter();
        let first = segments.next()?;
        let mut entity = self.module.get(first.as_ref())?;
        for segment in segments {
            entity = entity.module.get(segment.as_ref())?;
        }
        Some(entity)
    }

    /// Link target for a documented path, e.g. `/Collection.Keyed`
    pub fn link_target<S: AsRef<str>>(path: &[S]) -> String {
        let joined = path
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(".");
        format!("/{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn sample_registry() -> Registry {
        Registry::new("4.0.0")
            .with_entity("Map", DocEntity::interface(InterfaceDef::default()))
            .with_entity(
                "Collection",
                DocEntity::interface(InterfaceDef::default())
                    .with_nested("Keyed", DocEntity::interface(InterfaceDef::default())),
            )
    }

    #[test]
    fn test_resolve_top_level() {
        let registry = sample_registry();
        assert!(registry.resolve(&["Map"]).is_some());
        assert!(registry.resolve(&["List"]).is_none());
    }

    #[test]
    fn test_resolve_nested() {
        let registry = sample_registry();
        assert!(registry.resolve(&["Collection", "Keyed"]).is_some());
        assert!(registry.resolve(&["Collection", "Indexed"]).is_none());
        // A miss partway through the path is a miss for the whole path
        assert!(registry.resolve(&["Missing", "Keyed"]).is_none());
    }

    #[test]
    fn test_resolve_empty_path() {
        let registry = sample_registry();
        assert!(registry.resolve::<&str>(&[]).is_none());
    }

    #[test]
    fn test_link_target() {
        assert_eq!(Registry::link_target(&["Map"]), "/Map");
        assert_eq!(
            Registry::link_target(&["Collection", "Keyed"]),
            "/Collection.Keyed"
        );
    }

    #[test]
    fn test_from_json_file() {
        let registry = sample_registry();
        let json = serde_json::to_string(&registry).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Registry::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, registry);
        assert_eq!(loaded.version, "4.0.0");
    }

    #[test]
    fn test_module_order_preserved() {
        let registry = sample_registry();
        let names: Vec<&String> = registry.module.keys().collect();
        assert_eq!(names, vec!["Map", "Collection"]);
    }
}
