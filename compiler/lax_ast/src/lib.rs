//! Expression tree model for Lax.
//!
//! This crate defines [`Operator`] descriptors and the [`Node`] tree that the
//! parser produces, along with a visitor for walking trees and, with the
//! `serde` feature, JSON helpers.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::{Fixity, InteriorNode, Node, Operator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes a tree (or any AST value) to a JSON string.
///
/// # Example
///
/// ```
/// use lax_ast::{to_json, Node, Operator};
///
/// let tree = Node::binary(Operator::binary("plus", 1), Node::leaf(1), Node::leaf(2));
/// let json = to_json(&tree).unwrap();
///
/// assert!(json.contains(r#""name": "plus""#));
/// assert!(json.contains(r#""fixity": "Binary""#));
/// assert!(json.contains(r#""Leaf": 2"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree (or any AST value) from a JSON string.
///
/// # Examples
///
/// ```
/// use lax_ast::{from_json, Node};
///
/// let leaf: Node<String> = from_json(r#"{"Leaf":"x"}"#).unwrap();
/// assert_eq!(leaf, Node::leaf("x".to_string()));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() -> Result<()> {
        let expr = Node::unary(
            Operator::postfix("squared", 6),
            Node::binary(Operator::binary("plus", 1), Node::leaf(1), Node::leaf(2)),
        );

        let json = to_json(&expr)?;
        let deserialized: Node<i32> = from_json(&json)?;
        assert_eq!(expr, deserialized);
        Ok(())
    }
}
