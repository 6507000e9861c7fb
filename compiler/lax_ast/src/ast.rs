// Operator and expression tree definitions for Lax.
// Trees are produced by lax_parser; nothing here knows about looseness.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where an operator takes its operands from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Fixity {
    /// `lhs op rhs`
    Binary,
    /// `op operand`
    UnaryPrefix,
    /// `operand op`
    UnaryPostfix,
}

impl Fixity {
    /// Number of children an interior node with this fixity ends up with.
    pub fn arity(self) -> usize {
        match self {
            Fixity::Binary => 2,
            Fixity::UnaryPrefix | Fixity::UnaryPostfix => 1,
        }
    }
}

impl fmt::Display for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Fixity::Binary => "binary",
            Fixity::UnaryPrefix => "unary prefix",
            Fixity::UnaryPostfix => "unary postfix",
        };
        f.write_str(text)
    }
}

/// An immutable operator descriptor.
///
/// Cloning is cheap: the name is shared, so every node built from the same
/// keyword points at the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operator {
    name: Arc<str>,
    fixity: Fixity,
    priority: i32,
}

impl Operator {
    /// Creates an operator. Higher `priority` binds tighter.
    pub fn new(name: impl Into<Arc<str>>, fixity: Fixity, priority: i32) -> Self {
        Self {
            name: name.into(),
            fixity,
            priority,
        }
    }

    pub fn binary(name: impl Into<Arc<str>>, priority: i32) -> Self {
        Self::new(name, Fixity::Binary, priority)
    }

    pub fn prefix(name: impl Into<Arc<str>>, priority: i32) -> Self {
        Self::new(name, Fixity::UnaryPrefix, priority)
    }

    pub fn postfix(name: impl Into<Arc<str>>, priority: i32) -> Self {
        Self::new(name, Fixity::UnaryPostfix, priority)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fixity(&self) -> Fixity {
        self.fixity
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A node of a parsed expression tree.
///
/// Trees can be as deep as their input is long, so cloning, comparing,
/// formatting and dropping all walk the tree with an explicit stack.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node<V> {
    /// An opaque value, exactly as it appeared in the token stream.
    Leaf(V),
    /// An operator applied to its operands.
    Interior(InteriorNode<V>),
}

/// An operator together with its ordered operands.
///
/// `children` holds one node for unary operators and two (left, right) for
/// binary ones.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InteriorNode<V> {
    pub operator: Operator,
    pub children: Vec<Node<V>>,
}

impl<V> Node<V> {
    pub fn leaf(value: V) -> Self {
        Node::Leaf(value)
    }

    pub fn interior(operator: Operator, children: Vec<Node<V>>) -> Self {
        Node::Interior(InteriorNode { operator, children })
    }

    /// Shorthand for a binary node.
    pub fn binary(operator: Operator, lhs: Node<V>, rhs: Node<V>) -> Self {
        Self::interior(operator, vec![lhs, rhs])
    }

    /// Shorthand for a unary node of either fixity.
    pub fn unary(operator: Operator, operand: Node<V>) -> Self {
        Self::interior(operator, vec![operand])
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Interior(_) => None,
        }
    }

    pub fn operator(&self) -> Option<&Operator> {
        match self {
            Node::Leaf(_) => None,
            Node::Interior(interior) => Some(&interior.operator),
        }
    }

    /// Operands of an interior node; empty for leaves.
    pub fn children(&self) -> &[Node<V>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Interior(interior) => &interior.children,
        }
    }

    /// Total number of nodes in this tree, leaves included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    /// Length of the longest root-to-leaf path; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Leaf values in left-to-right order.
    pub fn leaves(&self) -> Vec<&V> {
        let mut values = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Node::Leaf(value) => values.push(value),
                Node::Interior(interior) => pending.extend(interior.children.iter().rev()),
            }
        }
        values
    }
}

impl<V> Drop for InteriorNode<V> {
    fn drop(&mut self) {
        // Detach grandchildren before each child goes out of scope, so no
        // drop ever sees a non-empty subtree.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Interior(interior) = &mut node {
                pending.append(&mut interior.children);
            }
        }
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        // (node, children already cloned)
        let mut work = vec![(self, false)];
        let mut built: Vec<Node<V>> = Vec::new();
        while let Some((node, expanded)) = work.pop() {
            match node {
                Node::Leaf(value) => built.push(Node::Leaf(value.clone())),
                Node::Interior(interior) if !expanded => {
                    work.push((node, true));
                    work.extend(interior.children.iter().rev().map(|child| (child, false)));
                }
                Node::Interior(interior) => {
                    let children = built.split_off(built.len() - interior.children.len());
                    built.push(Node::interior(interior.operator.clone(), children));
                }
            }
        }
        match built.pop() {
            Some(tree) => tree,
            None => unreachable!("the root is always built"),
        }
    }
}

impl<V: Clone> Clone for InteriorNode<V> {
    fn clone(&self) -> Self {
        Self {
            operator: self.operator.clone(),
            children: self.children.clone(),
        }
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Node::Leaf(lhs), Node::Leaf(rhs)) => {
                    if lhs != rhs {
                        return false;
                    }
                }
                (Node::Interior(lhs), Node::Interior(rhs)) => {
                    if lhs.operator != rhs.operator || lhs.children.len() != rhs.children.len() {
                        return false;
                    }
                    pending.extend(lhs.children.iter().zip(&rhs.children));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<V: PartialEq> PartialEq for InteriorNode<V> {
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator && self.children == other.children
    }
}

/// One piece of output while formatting a tree.
enum Piece<'a, V> {
    Node(&'a Node<V>),
    Operator(&'a Operator),
    Text(&'static str),
}

/// Queues the rest of `interior` after its opening parenthesis: operator
/// and operands in fixity order, then `)`. Pushed in reverse, so the last
/// entry is written first.
fn push_operands<'a, V>(interior: &'a InteriorNode<V>, pending: &mut Vec<Piece<'a, V>>) {
    let operator = Piece::Operator(&interior.operator);
    match (interior.operator.fixity(), interior.children.as_slice()) {
        (Fixity::Binary, [lhs, rhs]) => pending.extend([
            Piece::Text(")"),
            Piece::Node(rhs),
            Piece::Text(" "),
            operator,
            Piece::Text(" "),
            Piece::Node(lhs),
        ]),
        (Fixity::UnaryPrefix, [operand]) => {
            pending.extend([Piece::Text(")"), Piece::Node(operand), Piece::Text(" "), operator])
        }
        (Fixity::UnaryPostfix, [operand]) => {
            pending.extend([Piece::Text(")"), operator, Piece::Text(" "), Piece::Node(operand)])
        }
        // Malformed arity; fall back to a prefix listing so nothing is hidden.
        (_, children) => {
            pending.push(Piece::Text(")"));
            for child in children.iter().rev() {
                pending.extend([Piece::Node(child), Piece::Text(" ")]);
            }
            pending.push(operator);
        }
    }
}

fn write_pieces<V: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    mut pending: Vec<Piece<'_, V>>,
) -> fmt::Result {
    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Text(text) => f.write_str(text)?,
            Piece::Operator(operator) => write!(f, "{operator}")?,
            Piece::Node(Node::Leaf(value)) => write!(f, "{value}")?,
            Piece::Node(Node::Interior(interior)) => {
                f.write_str("(")?;
                push_operands(interior, &mut pending);
            }
        }
    }
    Ok(())
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pieces(f, vec![Piece::Node(self)])
    }
}

impl<V: fmt::Display> fmt::Display for InteriorNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = Vec::new();
        push_operands(self, &mut pending);
        f.write_str("(")?;
        write_pieces(f, pending)
    }
}
