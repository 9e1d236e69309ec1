// A tree under construction: values, tree, graph and layout kept in step

use super::graph::TreeGraph;
use super::BinaryTree;
use crate::engine::constants::MAX_TREE_VALUES;
use crate::engine::errors::EngineError;
use crate::layout::{layout_tree, Layout, LayoutConfig};
use tracing::debug;

/// Where the current tree came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeSource {
    /// Binary search tree built from inserted values, in insertion order
    Inserted(Vec<i64>),
    /// Complete tree with this many levels
    Complete(u32),
}

/// Owns the tree shown on screen
///
/// Every mutation rebuilds the tree from its source and recomputes the
/// layout once. A rejected mutation leaves the session untouched.
#[derive(Debug, Clone)]
pub struct TreeSession {
    source: TreeSource,
    tree: BinaryTree,
    graph: TreeGraph,
    layout: Layout,
    config: LayoutConfig,
}

impl TreeSession {
    pub fn new(config: LayoutConfig) -> Self {
        TreeSession {
            source: TreeSource::Inserted(Vec::new()),
            tree: BinaryTree::new(),
            graph: TreeGraph::default(),
            layout: Layout::default(),
            config,
        }
    }

    pub fn source(&self) -> &TreeSource {
        &self.source
    }

    /// Inserted values, empty for a generated complete tree
    pub fn values(&self) -> &[i64] {
        match &self.source {
            TreeSource::Inserted(values) => values,
            TreeSource::Complete(_) => &[],
        }
    }

    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    pub fn graph(&self) -> &TreeGraph {
        &self.graph
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Add a value; a generated complete tree is replaced by a fresh BST
    pub fn insert(&mut self, value: i64) -> Result<(), EngineError> {
        let mut values = self.values().to_vec();
        if values.len() >= MAX_TREE_VALUES {
            return Err(EngineError::invalid(
                "value",
                format!("a tree holds at most {} values", MAX_TREE_VALUES),
            ));
        }
        values.push(value);
        self.rebuild(TreeSource::Inserted(values))
    }

    pub fn generate_complete(&mut self, levels: u32) -> Result<(), EngineError> {
        self.rebuild(TreeSource::Complete(levels))
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), EngineError> {
        let layout = layout_tree(&self.graph.nodes, &self.graph.edges, &config)?;
        self.config = config;
        self.layout = layout;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.source = TreeSource::Inserted(Vec::new());
        self.tree = BinaryTree::new();
        self.graph = TreeGraph::default();
        self.layout = Layout::default();
    }

    fn rebuild(&mut self, source: TreeSource) -> Result<(), EngineError> {
        let tree = match &source {
            TreeSource::Inserted(values) => BinaryTree::from_values(values),
            TreeSource::Complete(levels) => BinaryTree::complete(*levels)?,
        };
        let graph = TreeGraph::from_tree(&tree);
        let layout = layout_tree(&graph.nodes, &graph.edges, &self.config)?;
        debug!(nodes = tree.len(), ranks = layout.depth(), "tree rebuilt");

        self.source = source;
        self.tree = tree;
        self.graph = graph;
        self.layout = layout;
        Ok(())
    }
}

impl Default for TreeSession {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rebuilds_layout() {
        let mut session = TreeSession::default();
        session.insert(5).unwrap();
        assert_eq!(session.layout().nodes.len(), 1);
        session.insert(3).unwrap();
        session.insert(8).unwrap();
        assert_eq!(session.values(), &[5, 3, 8]);
        assert_eq!(session.layout().nodes.len(), 3);
        assert_eq!(session.layout().edges.len(), 2);
        assert_eq!(session.layout().depth(), 2);
    }

    #[test]
    fn test_value_cap_leaves_session_untouched() {
        let mut session = TreeSession::default();
        for v in 0..MAX_TREE_VALUES as i64 {
            session.insert(v).unwrap();
        }
        let before = session.layout().clone();
        assert!(session.insert(99).is_err());
        assert_eq!(session.values().len(), MAX_TREE_VALUES);
        assert_eq!(session.layout(), &before);
    }

    #[test]
    fn test_complete_then_insert_starts_fresh() {
        let mut session = TreeSession::default();
        session.generate_complete(3).unwrap();
        assert_eq!(session.tree().len(), 7);
        assert_eq!(session.source(), &TreeSource::Complete(3));
        session.insert(42).unwrap();
        assert_eq!(session.tree().len(), 1);
        assert_eq!(session.values(), &[42]);
    }

    #[test]
    fn test_bad_levels_rejected() {
        let mut session = TreeSession::default();
        session.insert(1).unwrap();
        assert!(session.generate_complete(9).is_err());
        assert_eq!(session.values(), &[1]);
    }

    #[test]
    fn test_clear() {
        let mut session = TreeSession::default();
        session.insert(1).unwrap();
        session.clear();
        assert!(session.tree().is_empty());
        assert!(session.layout().is_empty());
    }
}
