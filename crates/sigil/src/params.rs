//! Parameter definition types
//!
//! This module provides the parameter representation shared by call
//! signatures, function types and index signatures.

use crate::types::TypeNode;
use serde::{Deserialize, Serialize};

/// Parameter definition for call signatures and function types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDef {
    /// Parameter name
    pub name: String,

    /// Parameter type
    pub param_type: TypeNode,

    /// Whether this parameter is optional (`name?: T`)
    #[serde(default)]
    pub optional: bool,

    /// Whether this is a rest parameter (`...name: T[]`)
    ///
    /// Independent of `optional`; both flags may be set.
    #[serde(default)]
    pub rest: bool,
}

impl ParamDef {
    /// Create a new required parameter
    pub fn new(name: impl Into<String>, param_type: TypeNode) -> Self {
        Self {
            name: name.into(),
            param_type,
            optional: false,
            rest: false,
        }
    }

    /// Mark as optional
    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as rest parameter
    pub fn as_rest(mut self) -> Self {
        self.rest = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_builders() {
        let p = ParamDef::new("values", TypeNode::array(TypeNode::number()))
            .as_rest()
            .as_optional();
        assert_eq!(p.name, "values");
        assert!(p.rest);
        assert!(p.optional);
    }
}
