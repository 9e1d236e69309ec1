//! Binary trees stored as arenas
//!
//! Nodes live in a flat `Vec` and refer to their children by [`NodeId`], so
//! a tree has no parent back-pointers and no reference cycles. Trees are
//! never patched in place once built: a new value list produces a new tree.
//!
//! - [`BinaryTree`]: the arena, with BST insertion and the complete-tree
//!   generator
//! - [`graph`]: conversion into path-identified nodes and edges for layout
//! - [`session`]: value list plus tree, graph and layout kept in sync

pub mod graph;
pub mod session;

use crate::engine::errors::EngineError;
use crate::engine::input::validate_levels;

/// Index of a node inside its [`BinaryTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl TreeNode {
    fn leaf(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl BinaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a binary search tree by inserting `values` in order
    pub fn from_values(values: &[i64]) -> Self {
        let mut tree = BinaryTree::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    /// Complete tree with `levels` levels, labelled `1..2^levels` in
    /// breadth-first (heap) order
    pub fn complete(levels: u32) -> Result<Self, EngineError> {
        let levels = validate_levels(levels)?;
        let count = (1usize << levels) - 1;
        let nodes = (1..=count)
            .map(|label| {
                let child = |n: usize| (n <= count).then(|| NodeId(n - 1));
                TreeNode {
                    value: label as i64,
                    left: child(2 * label),
                    right: child(2 * label + 1),
                }
            })
            .collect();
        Ok(BinaryTree {
            nodes,
            root: Some(NodeId(0)),
        })
    }

    /// Insert following the BST rule; equal values go right
    pub fn insert(&mut self, value: i64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::leaf(value));

        let Some(mut current) = self.root else {
            self.root = Some(id);
            return id;
        };
        loop {
            let node = &mut self.nodes[current.0];
            let slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(id);
                    return id;
                }
            }
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn value(&self, id: NodeId) -> i64 {
        self.nodes[id.0].value
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        height
    }
}
