//! Visitor pattern implementation for walking expression trees.
//!
//! Implement [`Visitor`] to run an operation over a tree and call
//! [`Visitable::accept`] on the root. The default hooks walk every child in
//! order and return `Ok(Default::default())`.

use crate::ast::{InteriorNode, Node};

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error raised by a visitor to abort a traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),

    /// An error attached to a specific operator.
    #[error("{message} at operator {operator}")]
    AtOperator {
        /// The error message.
        message: String,
        /// Name of the operator being visited.
        operator: String,
    },
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }

    /// Creates an error pointing at the operator of `node`.
    pub fn at_operator<T: Into<String>, V>(msg: T, node: &InteriorNode<V>) -> Self {
        VisitError::AtOperator {
            message: msg.into(),
            operator: node.operator.name().to_string(),
        }
    }
}

/// A tree node that can be handed to a [`Visitor`].
pub trait Visitable<V> {
    /// Dispatches to the visitor hook matching this node.
    fn accept<T: Visitor<V> + ?Sized>(&self, visitor: &mut T) -> VisitResult<T::Output>;
}

/// Operations over expression trees.
///
/// Hooks recurse through [`Visitor::visit_children`], so traversal depth
/// follows tree depth.
pub trait Visitor<V> {
    /// The output type of the visitor.
    type Output: Default;

    fn visit_leaf(&mut self, _value: &V) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_interior(&mut self, node: &InteriorNode<V>) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    /// Visits every operand of `node`, left to right, keeping the last output.
    fn visit_children(&mut self, node: &InteriorNode<V>) -> VisitResult<Self::Output> {
        let mut output = Self::Output::default();
        for child in &node.children {
            output = child.accept(self)?;
        }
        Ok(output)
    }
}

impl<V> Visitable<V> for Node<V> {
    fn accept<T: Visitor<V> + ?Sized>(&self, visitor: &mut T) -> VisitResult<T::Output> {
        match self {
            Node::Leaf(value) => visitor.visit_leaf(value),
            Node::Interior(interior) => visitor.visit_interior(interior),
        }
    }
}

impl<V> Visitable<V> for InteriorNode<V> {
    fn accept<T: Visitor<V> + ?Sized>(&self, visitor: &mut T) -> VisitResult<T::Output> {
        visitor.visit_interior(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_visitor_pattern() {
        // 1 plus (2 times 3)
        let ast = Node::binary(
            Operator::binary("plus", 1),
            Node::leaf(1),
            Node::binary(Operator::binary("times", 2), Node::leaf(2), Node::leaf(3)),
        );

        struct BinaryCounter {
            count: usize,
        }

        impl Visitor<i32> for BinaryCounter {
            type Output = ();

            fn visit_interior(&mut self, node: &InteriorNode<i32>) -> VisitResult<()> {
                self.count += 1;
                self.visit_children(node)
            }
        }

        let mut counter = BinaryCounter { count: 0 };
        ast.accept(&mut counter).unwrap();
        assert_eq!(counter.count, 2);

        /// Collects operator names in pre-order.
        #[derive(Default)]
        struct OperatorCollector {
            names: Vec<String>,
        }

        impl Visitor<i32> for OperatorCollector {
            type Output = ();

            fn visit_interior(&mut self, node: &InteriorNode<i32>) -> VisitResult<()> {
                self.names.push(node.operator.name().to_string());
                self.visit_children(node)
            }
        }

        let mut collector = OperatorCollector::default();
        ast.accept(&mut collector).unwrap();
        assert_eq!(collector.names, vec!["plus", "times"]);
    }

    #[test]
    fn test_visitor_error_aborts() {
        let ast = Node::unary(Operator::prefix("sqrt", 4), Node::leaf(-4));

        struct RejectNegative;

        impl Visitor<i32> for RejectNegative {
            type Output = ();

            fn visit_interior(&mut self, node: &InteriorNode<i32>) -> VisitResult<()> {
                if node.children.iter().any(|c| c.value().is_some_and(|v| *v < 0)) {
                    return Err(VisitError::at_operator("negative operand", node));
                }
                self.visit_children(node)
            }
        }

        let err = ast.accept(&mut RejectNegative).unwrap_err();
        assert_eq!(err.to_string(), "negative operand at operator sqrt");
    }
}
