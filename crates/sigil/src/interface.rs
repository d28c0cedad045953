//! Interface and call-signature definitions
//!
//! This module provides the documented-entity shapes the renderer consumes:
//! call signatures (with overloads), interface headers with their inheritance
//! clauses, and the per-member metadata needed to render an inherited member
//! in the context of the subtype currently being documented.

use crate::params::ParamDef;
use crate::types::{NamedTypeDef, TypeNode};
use serde::{Deserialize, Serialize};

/// A single call signature
///
/// A documented function or method holds one or more of these (overloads);
/// each renders on its own line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallSignatureDef {
    /// Generic parameter names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,

    /// Parameters
    #[serde(default)]
    pub params: Vec<ParamDef>,

    /// Return type, absent for untyped signatures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeNode>,
}

impl CallSignatureDef {
    /// Create a signature with parameters and a return type
    pub fn new(params: Vec<ParamDef>, return_type: TypeNode) -> Self {
        Self {
            type_params: vec![],
            params,
            return_type: Some(return_type),
        }
    }

    /// Add generic parameter names
    pub fn with_type_params(mut self, type_params: Vec<String>) -> Self {
        self.type_params = type_params;
        self
    }
}

/// A call-signature holder: a documented standalone or namespace-level function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    /// Overload signatures, in declaration order
    #[serde(default)]
    pub signatures: Vec<CallSignatureDef>,

    /// Free-text synopsis (markdown conversion is out of scope here)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl FunctionDef {
    /// Create a function with a single signature
    pub fn single(sig: CallSignatureDef) -> Self {
        Self {
            signatures: vec![sig],
            doc: None,
        }
    }
}

/// A documented member of an interface
///
/// A member with no signatures and a `property_type` is a property; anything
/// else is a method with overloads. `inherited_from` names the super interface
/// that declares the member and selects the substitution context used when the
/// member is rendered in a subtype's documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceMember {
    /// Member name
    pub name: String,

    /// Overload signatures; empty for properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<CallSignatureDef>,

    /// Property type, for non-method members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<TypeNode>,

    /// Whether the member is static (rendered with the parent as qualifier)
    #[serde(default)]
    pub is_static: bool,

    /// Dotted name of the super interface declaring this member, when inherited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<String>,

    /// Free-text synopsis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl InterfaceMember {
    /// Create a method member from its overload signatures
    pub fn method(name: impl Into<String>, signatures: Vec<CallSignatureDef>) -> Self {
        Self {
            name: name.into(),
            signatures,
            property_type: None,
            is_static: false,
            inherited_from: None,
            doc: None,
        }
    }

    /// Create a property member
    pub fn property(name: impl Into<String>, property_type: TypeNode) -> Self {
        Self {
            name: name.into(),
            signatures: vec![],
            property_type: Some(property_type),
            is_static: false,
            inherited_from: None,
            doc: None,
        }
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Record the super interface this member is inherited from
    pub fn inherited(mut self, super_name: impl Into<String>) -> Self {
        self.inherited_from = Some(super_name.into());
        self
    }

    /// Whether this member is a property rather than a method
    pub fn is_property(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// An interface definition: generic parameters, inheritance clauses, members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDef {
    /// Generic parameter names, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,

    /// Extended super types, each a (possibly generic) named-type instantiation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<NamedTypeDef>,

    /// Implemented super types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<NamedTypeDef>,

    /// Documented members, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<InterfaceMember>,
}

impl InterfaceDef {
    /// Create an interface with generic parameters only
    pub fn with_type_params(type_params: Vec<String>) -> Self {
        Self {
            type_params,
            ..Default::default()
        }
    }

    /// Add an extends clause entry
    pub fn extending(mut self, super_type: NamedTypeDef) -> Self {
        self.extends.push(super_type);
        self
    }

    /// Add an implements clause entry
    pub fn implementing(mut self, super_type: NamedTypeDef) -> Self {
        self.implements.push(super_type);
        self
    }
}
