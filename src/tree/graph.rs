// Conversion of an arena tree into layout nodes and edges

use super::{BinaryTree, NodeId};
use crate::layout::{Edge, GraphNode, Side};
use std::collections::VecDeque;

/// Nodes and edges of a tree, ids derived from the root-relative path
///
/// The root is `"1"`; a left child appends `L` and a right child appends
/// `R` to its parent's id, so `"1LR"` is the right child of the root's left
/// child. Nodes are listed breadth-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}

impl TreeGraph {
    pub fn from_tree(tree: &BinaryTree) -> Self {
        let mut graph = TreeGraph::default();
        let Some(root) = tree.root() else {
            return graph;
        };

        let mut queue: VecDeque<(NodeId, String, Side)> = VecDeque::new();
        queue.push_back((root, "1".to_string(), Side::Root));

        while let Some((id, path, side)) = queue.pop_front() {
            let node = tree.node(id);
            for (child, suffix, child_side) in [
                (node.left, 'L', Side::Left),
                (node.right, 'R', Side::Right),
            ] {
                if let Some(child) = child {
                    let child_path = format!("{}{}", path, suffix);
                    graph.edges.push(Edge::new(path.clone(), child_path.clone()));
                    queue.push_back((child, child_path, child_side));
                }
            }
            graph.nodes.push(GraphNode {
                id: path,
                label: node.value.to_string(),
                side,
                tree_node: Some(id),
            });
        }
        graph
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_ids_breadth_first() {
        let tree = BinaryTree::from_values(&[5, 3, 8, 4]);
        let graph = TreeGraph::from_tree(&tree);
        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1L", "1R", "1LR"]);
        let labels: Vec<_> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["5", "3", "8", "4"]);
        assert_eq!(graph.nodes[3].side, Side::Right);
        assert_eq!(
            graph.edges,
            vec![
                Edge::new("1", "1L"),
                Edge::new("1", "1R"),
                Edge::new("1L", "1LR")
            ]
        );
    }

    #[test]
    fn test_one_edge_per_child() {
        let tree = BinaryTree::complete(4).unwrap();
        let graph = TreeGraph::from_tree(&tree);
        assert_eq!(graph.nodes.len(), 15);
        assert_eq!(graph.edges.len(), 14);
    }

    #[test]
    fn test_empty_tree_has_empty_graph() {
        assert!(TreeGraph::from_tree(&BinaryTree::new()).is_empty());
    }
}
