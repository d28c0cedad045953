//! Type AST for documentation signatures
//!
//! This module provides `TypeNode`, the closed tagged union describing the
//! types that appear in a library's declaration file. The tree is produced by
//! an external declaration-to-AST extractor and consumed read-only by the
//! renderer, the length estimator and the substitution map builder.
//!
//! Nodes may share substructure but must form a finite tree for any single
//! render call; the recursive walkers do not detect cycles.

use crate::params::ParamDef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a named (possibly generic, possibly namespaced) type
///
/// `qualifier` is the outer-to-inner namespace path, e.g.
/// `["Collection"]` + `"Keyed"` for `Collection.Keyed<K, V>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedTypeDef {
    /// Namespace path, outer to inner (may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifier: Vec<String>,

    /// Type name
    pub name: String,

    /// Generic instantiation arguments (may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeNode>,
}

impl NamedTypeDef {
    /// Create a reference with no qualifier or arguments
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            qualifier: vec![],
            name: name.into(),
            args: vec![],
        }
    }

    /// Create an unqualified generic instantiation
    pub fn with_args(name: impl Into<String>, args: Vec<TypeNode>) -> Self {
        Self {
            qualifier: vec![],
            name: name.into(),
            args,
        }
    }

    /// Full path of this reference: qualifier segments followed by the name
    pub fn path(&self) -> Vec<&str> {
        self.qualifier
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect()
    }

    /// Dotted display name, e.g. `Collection.Keyed`
    pub fn display_name(&self) -> String {
        self.path().join(".")
    }
}

/// Function type definition (the `(params) => Ret` form)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeDef {
    /// Generic parameter names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,

    /// Parameters
    #[serde(default)]
    pub params: Vec<ParamDef>,

    /// Return type
    pub return_type: TypeNode,
}

/// A member of an inline object type
///
/// Either a named property or an index signature. Declaration order is
/// significant and preserved by the surrounding `Vec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum ObjectMemberDef {
    /// Index signature: `[params]: type`
    Index {
        params: Vec<ParamDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        member_type: Option<TypeNode>,
    },
    /// Named property: `name: type`
    Property {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        member_type: Option<TypeNode>,
    },
}

/// A node in the type AST
///
/// Closed union: the renderer matches exhaustively and fails with
/// `UnknownTypeKind` on the `Unknown` fallback rather than producing empty
/// output for kinds it does not understand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TypeNode {
    /// never type
    Never,
    /// any type
    Any,
    /// this type
    This,
    /// undefined type
    Undefined,
    /// boolean type
    Boolean,
    /// number type
    Number,
    /// string type
    String,

    /// Union type (A | B | C), at least one member
    Union(Vec<TypeNode>),

    /// Intersection type (A & B & C), at least one member
    Intersection(Vec<TypeNode>),

    /// Tuple type ([A, B, C])
    Tuple(Vec<TypeNode>),

    /// Inline object type ({ a: A, [key: string]: B })
    Object(Vec<ObjectMemberDef>),

    /// Indexed access type (target[index])
    Indexed {
        target: Box<TypeNode>,
        index: Box<TypeNode>,
    },

    /// Keyword operator applied to a type (keyof T, readonly T)
    Operator {
        operator: String,
        operand: Box<TypeNode>,
    },

    /// Array type (T[])
    Array(Box<TypeNode>),

    /// Function type ((a: A) => B)
    Function(Box<FunctionTypeDef>),

    /// Reference to a generic parameter in scope (T)
    TypeParam(String),

    /// Reference to a named type (Map<K, V>, Collection.Keyed<K, V>)
    Named(NamedTypeDef),

    /// Fallback for kinds outside the closed union; rendering it is an error
    #[default]
    Unknown,
}

impl TypeNode {
    /// Create a never type
    pub fn never() -> Self {
        TypeNode::Never
    }

    /// Create an any type
    pub fn any() -> Self {
        TypeNode::Any
    }

    /// Create a this type
    pub fn this() -> Self {
        TypeNode::This
    }

    /// Create an undefined type
    pub fn undefined() -> Self {
        TypeNode::Undefined
    }

    /// Create a boolean type
    pub fn boolean() -> Self {
        TypeNode::Boolean
    }

    /// Create a number type
    pub fn number() -> Self {
        TypeNode::Number
    }

    /// Create a string type
    pub fn string() -> Self {
        TypeNode::String
    }

    /// Create a union type
    pub fn union(members: Vec<TypeNode>) -> Self {
        TypeNode::Union(members)
    }

    /// Create an intersection type
    pub fn intersection(members: Vec<TypeNode>) -> Self {
        TypeNode::Intersection(members)
    }

    /// Create a tuple type
    pub fn tuple(elements: Vec<TypeNode>) -> Self {
        TypeNode::Tuple(elements)
    }

    /// Create an inline object type
    pub fn object(members: Vec<ObjectMemberDef>) -> Self {
        TypeNode::Object(members)
    }

    /// Create an indexed access type
    pub fn indexed(target: TypeNode, index: TypeNode) -> Self {
        TypeNode::Indexed {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    /// Create a keyword-operator type
    pub fn operator(operator: impl Into<String>, operand: TypeNode) -> Self {
        TypeNode::Operator {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    /// Create an array type
    pub fn array(element: TypeNode) -> Self {
        TypeNode::Array(Box::new(element))
    }

    /// Create a function type
    pub fn function(params: Vec<ParamDef>, return_type: TypeNode) -> Self {
        TypeNode::Function(Box::new(FunctionTypeDef {
            type_params: vec![],
            params,
            return_type,
        }))
    }

    /// Create a generic function type
    pub fn generic_function(
        type_params: Vec<String>,
        params: Vec<ParamDef>,
        return_type: TypeNode,
    ) -> Self {
        TypeNode::Function(Box::new(FunctionTypeDef {
            type_params,
            params,
            return_type,
        }))
    }

    /// Create a reference to a generic parameter in scope
    pub fn type_param(name: impl Into<String>) -> Self {
        TypeNode::TypeParam(name.into())
    }

    /// Create an unqualified named-type reference
    pub fn named(name: impl Into<String>) -> Self {
        TypeNode::Named(NamedTypeDef::simple(name))
    }

    /// Create an unqualified generic named-type reference
    pub fn named_with_args(name: impl Into<String>, args: Vec<TypeNode>) -> Self {
        TypeNode::Named(NamedTypeDef::with_args(name, args))
    }

    /// Create a namespace-qualified named-type reference
    pub fn qualified(
        qualifier: Vec<String>,
        name: impl Into<String>,
        args: Vec<TypeNode>,
    ) -> Self {
        TypeNode::Named(NamedTypeDef {
            qualifier,
            name: name.into(),
            args,
        })
    }

    /// Plain-text rendering of this node with no links, no substitution
    /// context and no wrapping
    pub fn to_plain(&self) -> crate::SigilResult<String> {
        let rendered = crate::render::Renderer::new()
            .render_type(self, &crate::render::RenderContext::default())?;
        Ok(rendered.plain_text())
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_plain() {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "<invalid type>"),
        }
    }
}
