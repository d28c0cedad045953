//! Error types and diagnostics
//!
//! This module provides error handling for the signature renderer. Rendering
//! errors signal producer defects in the type AST, not recoverable conditions:
//! a render that hits one should be aborted rather than patched over.

use thiserror::Error;

/// Result type for sigil operations
pub type SigilResult<T> = Result<T, SigilError>;

/// Main error type for sigil
#[derive(Debug, Error)]
pub enum SigilError {
    /// A type node with a kind outside the closed union reached the renderer.
    /// The AST producer emitted something this crate does not understand.
    #[error("type node with unknown kind")]
    UnknownTypeKind,

    /// A required type node is absent or malformed (for example a union with
    /// no members). Indicates a defect in the AST producer.
    #[error("invalid type node: {0}")]
    InvalidTypeNode(&'static str),

    /// IO error while loading a registry file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SigilError {
    /// Create an invalid-node error with a short description of what was
    /// expected at the offending position.
    pub fn invalid(context: &'static str) -> Self {
        SigilError::InvalidTypeNode(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SigilError::UnknownTypeKind.to_string(),
            "type node with unknown kind"
        );
        assert_eq!(
            SigilError::invalid("union type with no members").to_string(),
            "invalid type node: union type with no members"
        );
    }
}
