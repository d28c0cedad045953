//! Inheritance-aware type-parameter substitution
//!
//! When interface `A<T>` extends `B<number, T>` and `B<K, V>` extends
//! `C<K, V, V>`, a member declared on `C` and inherited down to `A` must show
//! its `C`-scoped parameters resolved to the concrete types `A` supplied:
//!
//! ```text
//! build for C:  {}
//! build for B:  { C#X: K,      C#Y: V, C#Z: V }
//! build for A:  { B#K: number, B#V: T,
//!                 C#X: number, C#Y: T, C#Z: T }
//! ```
//!
//! The map is computed once when an interface's documentation is rendered and
//! reused for every member in that pass. The registry is passed in explicitly;
//! a super type not found in it is skipped (it may be intentionally
//! undocumented or external), which is the one non-fatal condition in this
//! crate.

use crate::interface::InterfaceDef;
use crate::registry::Registry;
use crate::types::TypeNode;
use indexmap::IndexMap;

/// Key of a substitution entry: a super type name paired with one of its
/// declared generic parameter names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubstKey {
    /// Dotted display name of the super interface, e.g. `Collection.Keyed`
    pub super_name: String,
    /// Generic parameter name declared by that interface
    pub param: String,
}

impl SubstKey {
    /// Create a key
    pub fn new(super_name: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            super_name: super_name.into(),
            param: param.into(),
        }
    }
}

/// Mapping from super-interface generic parameters to the concrete types
/// supplied by the subtype being documented
///
/// Built once per interface-render session, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubstitutionMap {
    entries: IndexMap<SubstKey, TypeNode>,
}

impl SubstitutionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the concrete type for `(super_name, param)`
    pub fn get(&self, super_name: &str, param: &str) -> Option<&TypeNode> {
        self.entries
            .get(&SubstKey::new(super_name, param))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&SubstKey, &TypeNode)> {
        self.entries.iter()
    }

    /// Insert unless the key is already present.
    ///
    /// Multiple extends paths can define the same key; the first one wins so
    /// the result does not depend on how deep each path recurses.
    fn insert_first_wins(&mut self, key: SubstKey, value: TypeNode) {
        self.entries.entry(key).or_insert(value);
    }
}

/// Build the substitution map for an interface definition
///
/// For each extends entry, resolves the super interface through the registry,
/// zips its declared parameter names against the entry's concrete arguments,
/// then folds in the super interface's own map with local parameter references
/// rewritten to the concrete arguments. Extends entries naming undocumented
/// super types are skipped.
pub fn build_substitution_map(def: &InterfaceDef, registry: &Registry) -> SubstitutionMap {
    let mut map = SubstitutionMap::new();

    for entry in &def.extends {
        let super_entity = match registry.resolve(&entry.path()) {
            Some(entity) => entity,
            None => continue,
        };
        let super_def = match &super_entity.interface {
            Some(def) => def,
            None => continue,
        };
        let super_name = entry.display_name();

        // Positional zip of declared parameter names against supplied
        // arguments; declared parameters beyond the argument list stay
        // unmapped.
        let mut local: IndexMap<&str, &TypeNode> = IndexMap::new();
        for (i, param) in super_def.type_params.iter().enumerate() {
            if let Some(arg) = entry.args.get(i) {
                local.insert(param.as_str(), arg);
            }
        }

        for (param, arg) in &local {
            map.insert_first_wins(SubstKey::new(&super_name, *param), (*arg).clone());
        }

        let super_map = build_substitution_map(super_def, registry);
        for (key, value) in super_map.iter() {
            let rewritten = match value {
                TypeNode::TypeParam(name) => match local.get(name.as_str()) {
                    Some(arg) => (*arg).clone(),
                    None => value.clone(),
                },
                _ => value.clone(),
            };
            map.insert_first_wins(key.clone(), rewritten);
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DocEntity;
    use crate::types::NamedTypeDef;
    use pretty_assertions::assert_eq;

    /// type A<T> extends B<number, T>
    /// type B<K, V> extends C<K, V, V>
    /// type C<X, Y, Z>
    fn chain_registry() -> Registry {
        let c = InterfaceDef::with_type_params(vec![
            "X".to_string(),
            "Y".to_string(),
            "Z".to_string(),
        ]);
        let b = InterfaceDef::with_type_params(vec!["K".to_string(), "V".to_string()])
            .extending(NamedTypeDef::with_args(
                "C",
                vec![
                    TypeNode::type_param("K"),
                    TypeNode::type_param("V"),
                    TypeNode::type_param("V"),
                ],
            ));
        let a = InterfaceDef::with_type_params(vec!["T".to_string()]).extending(
            NamedTypeDef::with_args(
                "B",
                vec![TypeNode::number(), TypeNode::type_param("T")],
            ),
        );

        Registry::new("1.0.0")
            .with_entity("A", DocEntity::interface(a))
            .with_entity("B", DocEntity::interface(b))
            .with_entity("C", DocEntity::interface(c))
    }

    #[test]
    fn test_transitive_substitution() {
        let registry = chain_registry();
        let a = registry.resolve(&["A"]).unwrap().interface.as_ref().unwrap();
        let map = build_substitution_map(a, &registry);

        assert_eq!(map.len(), 5);
        assert_eq!(map.get("B", "K"), Some(&TypeNode::number()));
        assert_eq!(map.get("B", "V"), Some(&TypeNode::type_param("T")));
        assert_eq!(map.get("C", "X"), Some(&TypeNode::number()));
        assert_eq!(map.get("C", "Y"), Some(&TypeNode::type_param("T")));
        assert_eq!(map.get("C", "Z"), Some(&TypeNode::type_param("T")));
    }

    #[test]
    fn test_mid_chain_map() {
        let registry = chain_registry();
        let b = registry.resolve(&["B"]).unwrap().interface.as_ref().unwrap();
        let map = build_substitution_map(b, &registry);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("C", "X"), Some(&TypeNode::type_param("K")));
        assert_eq!(map.get("C", "Y"), Some(&TypeNode::type_param("V")));
        assert_eq!(map.get("C", "Z"), Some(&TypeNode::type_param("V")));
    }

    #[test]
    fn test_leaf_interface_has_empty_map() {
        let registry = chain_registry();
        let c = registry.resolve(&["C"]).unwrap().interface.as_ref().unwrap();
        assert!(build_substitution_map(c, &registry).is_empty());
    }

    #[test]
    fn test_unresolved_super_type_is_skipped() {
        let def = InterfaceDef::with_type_params(vec!["T".to_string()]).extending(
            NamedTypeDef::with_args("External", vec![TypeNode::type_param("T")]),
        );
        let registry = Registry::new("1.0.0");
        assert!(build_substitution_map(&def, &registry).is_empty());
    }

    #[test]
    fn test_qualified_super_type() {
        let keyed = InterfaceDef::with_type_params(vec!["K".to_string(), "V".to_string()]);
        let registry = Registry::new("4.0.0").with_entity(
            "Collection",
            DocEntity::interface(InterfaceDef::default())
                .with_nested("Keyed", DocEntity::interface(keyed)),
        );

        let map_def = InterfaceDef::with_type_params(vec!["K".to_string(), "V".to_string()])
            .extending(NamedTypeDef {
                qualifier: vec!["Collection".to_string()],
                name: "Keyed".to_string(),
                args: vec![TypeNode::type_param("K"), TypeNode::type_param("V")],
            });
        let map = build_substitution_map(&map_def, &registry);

        assert_eq!(
            map.get("Collection.Keyed", "K"),
            Some(&TypeNode::type_param("K"))
        );
        assert_eq!(
            map.get("Collection.Keyed", "V"),
            Some(&TypeNode::type_param("V"))
        );
    }

    #[test]
    fn test_first_wins_on_colliding_paths() {
        // D<P>; E extends D<string>; F extends D<number>;
        // G extends E, F - E's contribution for D#P lands first and sticks.
        let d = InterfaceDef::with_type_params(vec!["P".to_string()]);
        let e = InterfaceDef::default()
            .extending(NamedTypeDef::with_args("D", vec![TypeNode::string()]));
        let f = InterfaceDef::default()
            .extending(NamedTypeDef::with_args("D", vec![TypeNode::number()]));
        let g = InterfaceDef::default()
            .extending(NamedTypeDef::simple("E"))
            .extending(NamedTypeDef::simple("F"));

        let registry = Registry::new("1.0.0")
            .with_entity("D", DocEntity::interface(d))
            .with_entity("E", DocEntity::interface(e))
            .with_entity("F", DocEntity::interface(f));

        let map = build_substitution_map(&g, &registry);
        assert_eq!(map.get("D", "P"), Some(&TypeNode::string()));
    }

    #[test]
    fn test_surplus_declared_params_stay_unmapped() {
        let c = InterfaceDef::with_type_params(vec!["X".to_string(), "Y".to_string()]);
        let d = InterfaceDef::default()
            .extending(NamedTypeDef::with_args("C", vec![TypeNode::boolean()]));
        let registry = Registry::new("1.0.0").with_entity("C", DocEntity::interface(c));

        let map = build_substitution_map(&d, &registry);
        assert_eq!(map.get("C", "X"), Some(&TypeNode::boolean()));
        assert_eq!(map.get("C", "Y"), None);
    }
}
