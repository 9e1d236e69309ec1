// Layered layout of a forest: ranks, in-rank order, coordinates

use super::{Edge, GraphNode, Layout, LayoutConfig, LayoutNode, RankDir, Side};
use crate::engine::errors::EngineError;
use rustc_hash::FxHashMap;
use tracing::trace;

// ── Internal forest representation ───────────────────────────────────

/// Adjacency of the validated input; indices follow the input node order
struct Forest {
    n: usize,
    /// children[u] = children of u, left before right
    children: Vec<Vec<usize>>,
    /// Nodes without a parent, in input order
    roots: Vec<usize>,
}

fn side_order(side: Side) -> u8 {
    match side {
        Side::Left => 0,
        Side::Root => 1,
        Side::Right => 2,
    }
}

impl Forest {
    fn build(nodes: &[GraphNode], edges: &[Edge]) -> Result<Self, EngineError> {
        let n = nodes.len();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.as_str(), i).is_some() {
                return Err(EngineError::invalid(
                    "nodes",
                    format!("duplicate node id '{}'", node.id),
                ));
            }
        }

        let lookup = |id: &str| {
            index.get(id).copied().ok_or_else(|| {
                EngineError::invalid("edges", format!("edge refers to unknown node '{}'", id))
            })
        };

        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        for edge in edges {
            let source = lookup(&edge.source)?;
            let target = lookup(&edge.target)?;
            if source == target {
                return Err(EngineError::invalid(
                    "edges",
                    format!("node '{}' is its own child", edge.source),
                ));
            }
            if parent[target].is_some() {
                return Err(EngineError::invalid(
                    "edges",
                    format!("node '{}' has more than one parent", edge.target),
                ));
            }
            parent[target] = Some(source);
            children[source].push(target);
        }

        // stable: edge order survives among children on the same side
        for list in &mut children {
            list.sort_by_key(|&c| side_order(nodes[c].side));
        }

        let roots: Vec<usize> = (0..n).filter(|&v| parent[v].is_none()).collect();

        // Every node must hang below some root; leftovers sit on a cycle.
        let mut reached = 0;
        let mut stack = roots.clone();
        while let Some(v) = stack.pop() {
            reached += 1;
            stack.extend(children[v].iter().copied());
        }
        if reached < n {
            return Err(EngineError::invalid(
                "edges",
                "edges contain a cycle",
            ));
        }

        Ok(Forest { n, children, roots })
    }
}

// ── Phase 1: Rank assignment ─────────────────────────────────────────

/// Rank of every node = its depth below its root
fn assign_ranks(forest: &Forest) -> Vec<usize> {
    let mut ranks = vec![0usize; forest.n];
    let mut stack: Vec<usize> = forest.roots.clone();
    while let Some(u) = stack.pop() {
        for &v in &forest.children[u] {
            ranks[v] = ranks[u] + 1;
            stack.push(v);
        }
    }
    ranks
}

// ── Phase 2: Ordering within ranks ───────────────────────────────────

/// rank_order[r] = nodes of rank r, left to right
///
/// A depth-first walk that visits children left to right reaches the nodes
/// of any rank in left-to-right order, so subtrees never interleave.
fn order_within_ranks(forest: &Forest, ranks: &[usize]) -> Vec<Vec<usize>> {
    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut rank_order = vec![Vec::new(); if forest.n == 0 { 0 } else { max_rank + 1 }];

    let mut stack: Vec<usize> = forest.roots.iter().rev().copied().collect();
    while let Some(u) = stack.pop() {
        rank_order[ranks[u]].push(u);
        stack.extend(forest.children[u].iter().rev().copied());
    }
    rank_order
}

// ── Phase 3: Coordinate assignment ───────────────────────────────────

/// Position of every node along the sibling axis
///
/// Each leaf takes the next free slot, so a subtree's width is proportional
/// to its breadth. An inner node is placed at the barycentre of its
/// children.
fn assign_order_coords(forest: &Forest, config: &LayoutConfig) -> Vec<f64> {
    let (order_span, _) = config.spans();
    let slot = config.slot();
    let mut coords = vec![0.0f64; forest.n];
    let mut next_slot = 0usize;

    let mut stack: Vec<(usize, bool)> = forest.roots.iter().rev().map(|&r| (r, false)).collect();
    while let Some((u, expanded)) = stack.pop() {
        let kids = &forest.children[u];
        if kids.is_empty() {
            coords[u] = next_slot as f64 * slot + order_span / 2.0;
            next_slot += 1;
        } else if expanded {
            let sum: f64 = kids.iter().map(|&c| coords[c]).sum();
            coords[u] = sum / kids.len() as f64;
        } else {
            stack.push((u, true));
            stack.extend(kids.iter().rev().map(|&c| (c, false)));
        }
    }
    coords
}

fn rank_coord(rank: usize, config: &LayoutConfig) -> f64 {
    let (_, rank_span) = config.spans();
    rank as f64 * (rank_span + config.rank_sep) + rank_span / 2.0
}

/// Lay out `nodes`/`edges` without the cosmetic nudge
pub fn layout(
    nodes: &[GraphNode],
    edges: &[Edge],
    config: &LayoutConfig,
) -> Result<Layout, EngineError> {
    if nodes.is_empty() {
        if let Some(edge) = edges.first() {
            return Err(EngineError::invalid(
                "edges",
                format!("edge refers to unknown node '{}'", edge.source),
            ));
        }
        return Ok(Layout::default());
    }

    let forest = Forest::build(nodes, edges)?;
    let ranks = assign_ranks(&forest);
    let rank_order = order_within_ranks(&forest, &ranks);
    trace!(
        nodes = forest.n,
        ranks = rank_order.len(),
        roots = forest.roots.len(),
        "ranks assigned"
    );

    let mut order = vec![0usize; forest.n];
    for rank_nodes in &rank_order {
        for (position, &v) in rank_nodes.iter().enumerate() {
            order[v] = position;
        }
    }

    let order_coords = assign_order_coords(&forest, config);

    let laid_out = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let along = order_coords[i];
            let across = rank_coord(ranks[i], config);
            let (x, y) = match config.direction {
                RankDir::TopBottom => (along, across),
                RankDir::LeftRight => (across, along),
            };
            LayoutNode {
                id: node.id.clone(),
                label: node.label.clone(),
                side: node.side,
                tree_node: node.tree_node,
                rank: ranks[i],
                order: order[i],
                x,
                y,
            }
        })
        .collect();

    Ok(Layout {
        nodes: laid_out,
        edges: edges.to_vec(),
    })
}
