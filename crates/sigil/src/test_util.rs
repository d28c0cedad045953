//! Test utilities and mock fixtures for sigil.
//!
//! This module provides a small but realistic documentation registry in the
//! shape an external declaration-file extractor would produce: a keyed
//! collection hierarchy with generic inheritance, a namespaced sub-interface
//! and a standalone function. Kept public so downstream crates can reuse the
//! fixtures in their own tests.

use crate::interface::{CallSignatureDef, FunctionDef, InterfaceDef, InterfaceMember};
use crate::params::ParamDef;
use crate::registry::{DocEntity, Registry};
use crate::types::{NamedTypeDef, TypeNode};

/// A `get(key: K): V | undefined` style signature over the given parameter names
pub fn mock_get_signature(key_param: &str, value_param: &str) -> CallSignatureDef {
    CallSignatureDef::new(
        vec![ParamDef::new("key", TypeNode::type_param(key_param))],
        TypeNode::union(vec![
            TypeNode::type_param(value_param),
            TypeNode::undefined(),
        ]),
    )
}

/// Build a registry mirroring a small collections library:
///
/// ```text
/// Collection<K, V>
///   .Indexed<T> extends Collection<number, T>
/// Map<K, V> extends Collection<K, V>
/// List<T> extends Collection.Indexed<T>
/// fromJS(json: any): Collection<any, any>   (function entity)
/// ```
pub fn mock_registry() -> Registry {
    let collection = InterfaceDef {
        type_params: vec!["K".to_string(), "V".to_string()],
        members: vec![
            InterfaceMember::property("size", TypeNode::number()),
            InterfaceMember::method("get", vec![mock_get_signature("K", "V")]),
        ],
        ..Default::default()
    };

    let indexed = InterfaceDef {
        type_params: vec!["T".to_string()],
        extends: vec![NamedTypeDef::with_args(
            "Collection",
            vec![TypeNode::number(), TypeNode::type_param("T")],
        )],
        members: vec![InterfaceMember::method(
            "get",
            vec![mock_get_signature("K", "V")],
        )
        .inherited("Collection")],
        ..Default::default()
    };

    let map = InterfaceDef {
        type_params: vec!["K".to_string(), "V".to_string()],
        extends: vec![NamedTypeDef::with_args(
            "Collection",
            vec![TypeNode::type_param("K"), TypeNode::type_param("V")],
        )],
        members: vec![
            InterfaceMember::method(
                "isMap",
                vec![CallSignatureDef::new(
                    vec![ParamDef::new("maybeMap", TypeNode::any())],
                    TypeNode::boolean(),
                )],
            )
            .as_static(),
            InterfaceMember::method("get", vec![mock_get_signature("K", "V")])
                .inherited("Collection"),
        ],
        ..Default::default()
    };

    let list = InterfaceDef {
        type_params: vec!["T".to_string()],
        extends: vec![NamedTypeDef {
            qualifier: vec!["Collection".to_string()],
            name: "Indexed".to_string(),
            args: vec![TypeNode::type_param("T")],
        }],
        members: vec![InterfaceMember::method(
            "get",
            vec![mock_get_signature("K", "V")],
        )
        .inherited("Collection")],
        ..Default::default()
    };

    let from_js = FunctionDef::single(CallSignatureDef::new(
        vec![ParamDef::new("json", TypeNode::any())],
        TypeNode::named_with_args("Collection", vec![TypeNode::any(), TypeNode::any()]),
    ));

    Registry::new("4.0.0")
        .with_entity(
            "Collection",
            DocEntity::interface(collection)
                .with_nested("Indexed", DocEntity::interface(indexed)),
        )
        .with_entity("Map", DocEntity::interface(map))
        .with_entity("List", DocEntity::interface(list))
        .with_entity("fromJS", DocEntity::function(from_js))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use crate::substitute::build_substitution_map;
    use pretty_assertions::assert_eq;

    /// End-to-end: documenting List, whose `get` comes from Collection two
    /// levels up with `K` fixed to `number` along the way.
    #[test]
    fn test_inherited_member_renders_with_concrete_types() {
        let registry = mock_registry();
        let renderer = Renderer::with_registry(&registry);

        let list = registry
            .resolve(&["List"])
            .unwrap()
            .interface
            .as_ref()
            .unwrap();
        let map = build_substitution_map(list, &registry);
        assert_eq!(map.get("Collection", "K"), Some(&TypeNode::number()));
        assert_eq!(
            map.get("Collection", "V"),
            Some(&TypeNode::type_param("T"))
        );

        let get = &list.members[0];
        let text = renderer
            .render_member_signatures("List", get, Some(&map))
            .unwrap();
        assert_eq!(text.plain_text(), "get(key: number): T | undefined");
    }

    #[test]
    fn test_map_inherits_its_own_parameter_names() {
        let registry = mock_registry();
        let renderer = Renderer::with_registry(&registry);

        let map_def = registry
            .resolve(&["Map"])
            .unwrap()
            .interface
            .as_ref()
            .unwrap();
        let substitutions = build_substitution_map(map_def, &registry);

        let get = &map_def.members[1];
        let text = renderer
            .render_member_signatures("Map", get, Some(&substitutions))
            .unwrap();
        assert_eq!(text.plain_text(), "get(key: K): V | undefined");
    }

    #[test]
    fn test_interface_header_links_super_type() {
        let registry = mock_registry();
        let renderer = Renderer::with_registry(&registry);

        let list = registry
            .resolve(&["List"])
            .unwrap()
            .interface
            .as_ref()
            .unwrap();
        let header = renderer.render_interface_header("List", list).unwrap();
        assert_eq!(
            header.plain_text(),
            "type List<T> extends Collection.Indexed<T>"
        );
        let linked = header.runs().find(|r| r.text == "Indexed").unwrap();
        assert_eq!(linked.link.as_deref(), Some("/Collection.Indexed"));
    }

    #[test]
    fn test_function_entity_renders() {
        let registry = mock_registry();
        let renderer = Renderer::with_registry(&registry);
        let from_js = registry.resolve(&["fromJS"]).unwrap().call.as_ref().unwrap();
        let text = renderer.render_function("fromJS", from_js).unwrap();
        assert_eq!(
            text.plain_text(),
            "fromJS(json: any): Collection<any, any>"
        );
    }
}
