//! Binary tree traversals replayed one node per tick
//!
//! The full visitation order is computed up front (with explicit stacks
//! instead of recursion), then [`TraversalRun`] hands it out one highlighted
//! node at a time. Tick `k` highlights `order[k]` and reports `order[k - 1]`
//! as the node being un-highlighted. One extra tick after the last node
//! clears every highlight.

use crate::engine::errors::EngineError;
use crate::snapshot::{join_order, Completion, TraversalSnapshot, Visit};
use crate::tree::{BinaryTree, NodeId};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// node, left, right
    Preorder,
    /// left, node, right
    Inorder,
    /// left, right, node
    Postorder,
}

impl TraversalKind {
    pub const ALL: [TraversalKind; 3] = [
        TraversalKind::Preorder,
        TraversalKind::Inorder,
        TraversalKind::Postorder,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TraversalKind::Preorder => "Preorder (TLR)",
            TraversalKind::Inorder => "Inorder (LTR)",
            TraversalKind::Postorder => "Postorder (LRT)",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TraversalKind::Preorder => "preorder",
            TraversalKind::Inorder => "inorder",
            TraversalKind::Postorder => "postorder",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for TraversalKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TraversalKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| {
                EngineError::invalid("traversal kind", format!("unknown traversal '{}'", s))
            })
    }
}

/// Visitation order of `tree` for `kind`
pub fn traversal_order(tree: &BinaryTree, kind: TraversalKind) -> Vec<NodeId> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    let mut order = Vec::with_capacity(tree.len());

    match kind {
        TraversalKind::Preorder => {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                order.push(id);
                let node = tree.node(id);
                stack.extend(node.right);
                stack.extend(node.left);
            }
        }
        TraversalKind::Inorder => {
            let mut stack = Vec::new();
            let mut cursor = Some(root);
            loop {
                while let Some(id) = cursor {
                    stack.push(id);
                    cursor = tree.node(id).left;
                }
                let Some(id) = stack.pop() else {
                    break;
                };
                order.push(id);
                cursor = tree.node(id).right;
            }
        }
        TraversalKind::Postorder => {
            // (node, children already pushed)
            let mut stack = vec![(root, false)];
            while let Some((id, expanded)) = stack.pop() {
                if expanded {
                    order.push(id);
                    continue;
                }
                let node = tree.node(id);
                stack.push((id, true));
                stack.extend(node.right.map(|c| (c, false)));
                stack.extend(node.left.map(|c| (c, false)));
            }
        }
    }
    order
}

/// Tick-by-tick replay of one traversal
#[derive(Debug, Clone)]
pub struct TraversalRun {
    order: Vec<Visit>,
    tick: usize,
}

impl TraversalRun {
    /// `None` when the tree is empty: there is nothing to replay
    pub fn new(kind: TraversalKind, tree: &BinaryTree) -> Option<Self> {
        let order: Vec<Visit> = traversal_order(tree, kind)
            .into_iter()
            .map(|node| Visit {
                node,
                value: tree.value(node),
            })
            .collect();
        if order.is_empty() {
            return None;
        }
        Some(TraversalRun {
            order,
            tick: 0,
        })
    }

    pub fn values(&self) -> Vec<i64> {
        self.order.iter().map(|v| v.value).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.tick > self.order.len()
    }

    pub fn completion(&self) -> Option<Completion> {
        self.is_finished().then(|| {
            let order = self.values();
            Completion::Traversed {
                summary: join_order(&order),
                order,
            }
        })
    }
}

impl Iterator for TraversalRun {
    type Item = TraversalSnapshot;

    fn next(&mut self) -> Option<TraversalSnapshot> {
        let k = self.tick;
        if k > self.order.len() {
            return None;
        }
        self.tick += 1;

        if k == self.order.len() {
            return Some(TraversalSnapshot {
                visited: self.values(),
                current: None,
                previous: None,
            });
        }
        Some(TraversalSnapshot {
            visited: self.order[..=k].iter().map(|v| v.value).collect(),
            current: Some(self.order[k]),
            previous: k.checked_sub(1).map(|p| self.order[p]),
        })
    }
}
