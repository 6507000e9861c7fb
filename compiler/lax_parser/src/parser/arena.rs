//! Node storage used while a parse is in progress.
//!
//! Nodes are referenced by index so that a node can sit on the scope stack
//! and be linked into its parent at the same time. The finished tree is
//! moved out with [`NodeArena::into_tree`].

use lax_ast::{Node, Operator};

/// Index of a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

enum Slot<V> {
    Leaf(V),
    Interior {
        operator: Operator,
        children: Vec<NodeId>,
    },
}

pub(crate) struct NodeArena<V> {
    slots: Vec<Slot<V>>,
}

impl<V> NodeArena<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn leaf(&mut self, value: V) -> NodeId {
        self.slots.push(Slot::Leaf(value));
        NodeId(self.slots.len() - 1)
    }

    /// Allocates an operator node with no children yet.
    pub(crate) fn interior(&mut self, operator: Operator) -> NodeId {
        let arity = operator.fixity().arity();
        self.slots.push(Slot::Interior {
            operator,
            children: Vec::with_capacity(arity),
        });
        NodeId(self.slots.len() - 1)
    }

    /// The operator of `id`, or `None` for leaves.
    pub(crate) fn operator(&self, id: NodeId) -> Option<&Operator> {
        match &self.slots[id.0] {
            Slot::Leaf(_) => None,
            Slot::Interior { operator, .. } => Some(operator),
        }
    }

    pub(crate) fn last_child(&self, id: NodeId) -> Option<NodeId> {
        match &self.slots[id.0] {
            Slot::Leaf(_) => None,
            Slot::Interior { children, .. } => children.last().copied(),
        }
    }

    /// Fills the next open operand slot of `parent`.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        match &mut self.slots[parent.0] {
            Slot::Interior { children, .. } => children.push(child),
            Slot::Leaf(_) => unreachable!("leaf {parent:?} cannot take operands"),
        }
    }

    /// Points the most recently filled operand slot of `parent` at `child`
    /// and returns the node it used to hold.
    ///
    /// This is the only way an already linked node gets rewired.
    pub(crate) fn replace_last_child(&mut self, parent: NodeId, child: NodeId) -> Option<NodeId> {
        match &mut self.slots[parent.0] {
            Slot::Interior { children, .. } => children
                .last_mut()
                .map(|slot| std::mem::replace(slot, child)),
            Slot::Leaf(_) => None,
        }
    }

    /// Moves the subtree rooted at `root` out into an owned [`Node`].
    ///
    /// Works with an explicit stack, so arbitrarily deep trees are fine.
    /// Nodes not reachable from `root` are dropped.
    pub(crate) fn into_tree(self, root: NodeId) -> Node<V> {
        let mut slots: Vec<Option<Slot<V>>> = self.slots.into_iter().map(Some).collect();
        let mut built: Vec<Option<Node<V>>> = Vec::with_capacity(slots.len());
        built.resize_with(slots.len(), || None);

        // (node, children already built)
        let mut work = vec![(root, false)];
        while let Some((id, expanded)) = work.pop() {
            if !expanded {
                work.push((id, true));
                if let Some(Slot::Interior { children, .. }) = &slots[id.0] {
                    work.extend(children.iter().map(|&child| (child, false)));
                }
                continue;
            }

            let node = match slots[id.0].take() {
                Some(Slot::Leaf(value)) => Node::Leaf(value),
                Some(Slot::Interior { operator, children }) => {
                    let children = children
                        .iter()
                        .filter_map(|child| built[child.0].take())
                        .collect();
                    Node::interior(operator, children)
                }
                // Each node has a single parent; a second visit finds nothing.
                None => continue,
            };
            built[id.0] = Some(node);
        }

        match built[root.0].take() {
            Some(tree) => tree,
            None => unreachable!("root {root:?} was built above"),
        }
    }
}
