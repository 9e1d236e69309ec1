//! Tree layout engine
//!
//! Turns a forest given as id-labelled nodes and parent→child edges into 2-D
//! coordinates, the way a layered (Sugiyama-style) graph drawing does it:
//!
//! 1. rank assignment: rank = depth below the root
//! 2. ordering within each rank: depth-first, children left to right
//! 3. coordinates: leaves get one slot each, parents sit at the barycentre
//!    of their children, ranks are separated by `rank_sep`
//!
//! Output is fully deterministic: the same nodes and edges in the same
//! order always produce bit-identical coordinates.
//!
//! [`nudge`] is a separate cosmetic pass applied after the layout proper;
//! it shifts left children left and right children right.

pub mod layered;
pub mod nudge;

use crate::engine::constants::*;
use crate::engine::errors::EngineError;
use crate::tree::NodeId;
use std::fmt;
use std::str::FromStr;

/// Which side of its parent a node hangs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Root,
    Left,
    Right,
}

/// A node handed to the layout engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub side: Side,
    /// Arena node this graph node was generated from, if any
    pub tree_node: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Direction in which ranks advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// "TB": ranks go down, siblings spread along x
    #[default]
    TopBottom,
    /// "LR": ranks go right, siblings spread along y
    LeftRight,
}

impl FromStr for RankDir {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TB" | "TD" => Ok(RankDir::TopBottom),
            "LR" => Ok(RankDir::LeftRight),
            other => Err(EngineError::invalid(
                "direction",
                format!("'{}' is not TB or LR", other),
            )),
        }
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDir::TopBottom => f.write_str("TB"),
            RankDir::LeftRight => f.write_str("LR"),
        }
    }
}

/// Geometry of the layout, in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub rank_sep: f64,
    pub node_sep: f64,
    pub direction: RankDir,
    /// Offset of the left/right nudge pass
    pub nudge: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            rank_sep: RANK_SEPARATION,
            node_sep: NODE_SEPARATION,
            direction: RankDir::TopBottom,
            nudge: SIDE_NUDGE,
        }
    }
}

impl LayoutConfig {
    /// Node extent along the sibling axis and along the rank axis
    pub(crate) fn spans(&self) -> (f64, f64) {
        match self.direction {
            RankDir::TopBottom => (self.node_width, self.node_height),
            RankDir::LeftRight => (self.node_height, self.node_width),
        }
    }

    /// Distance between two neighbouring leaf slots
    pub(crate) fn slot(&self) -> f64 {
        self.spans().0 + self.node_sep
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let sizes = [self.node_width, self.node_height, self.rank_sep, self.node_sep, self.nudge];
        if sizes.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(EngineError::invalid(
                "layout config",
                "sizes must be finite and non-negative",
            ));
        }
        if self.node_width == 0.0 || self.node_height == 0.0 {
            return Err(EngineError::invalid(
                "layout config",
                "nodes need a non-zero size",
            ));
        }
        // sibling subtrees must not swap sides once nudged
        if 2.0 * self.nudge >= self.slot() {
            return Err(EngineError::invalid(
                "layout config",
                format!(
                    "nudge {} is too large for a slot of {}",
                    self.nudge,
                    self.slot()
                ),
            ));
        }
        Ok(())
    }
}

/// A node with its computed position
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub label: String,
    pub side: Side,
    pub tree_node: Option<NodeId>,
    /// Depth below the root
    pub rank: usize,
    /// Position within the rank, left to right
    pub order: usize,
    /// Centre of the node
    pub x: f64,
    pub y: f64,
}

impl LayoutNode {
    /// Top-left corner, the position most renderers want
    pub fn top_left(&self, config: &LayoutConfig) -> (f64, f64) {
        (
            self.x - config.node_width / 2.0,
            self.y - config.node_height / 2.0,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<Edge>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_for(&self, tree_node: NodeId) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.tree_node == Some(tree_node))
    }

    /// Smallest box `(min_x, min_y, max_x, max_y)` holding every node centre
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.nodes.first()?;
        Some(self.nodes.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(x0, y0, x1, y1), n| (x0.min(n.x), y0.min(n.y), x1.max(n.x), y1.max(n.y)),
        ))
    }

    /// Number of distinct ranks
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.rank + 1).max().unwrap_or(0)
    }
}

/// Lay out a forest and apply the left/right nudge
///
/// An empty node list yields an empty layout. Edges must form a forest over
/// the given ids; anything else is rejected before coordinates are computed.
pub fn layout_tree(
    nodes: &[GraphNode],
    edges: &[Edge],
    config: &LayoutConfig,
) -> Result<Layout, EngineError> {
    config.validate()?;
    let mut layout = layered::layout(nodes, edges, config)?;
    nudge::apply(&mut layout, config);
    Ok(layout)
}
