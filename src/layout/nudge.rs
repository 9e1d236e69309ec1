// Cosmetic post-pass: push left children left and right children right
//
// Runs on a finished layout and only moves nodes along the sibling axis, so
// ranks and in-rank order are untouched. Kept apart from the layered layout
// so the latter stays a plain, reusable layout algorithm.

use super::{Layout, LayoutConfig, RankDir, Side};

pub fn offset_for(side: Side, amount: f64) -> f64 {
    match side {
        Side::Left => -amount,
        Side::Right => amount,
        Side::Root => 0.0,
    }
}

pub fn apply(layout: &mut Layout, config: &LayoutConfig) {
    for node in &mut layout.nodes {
        let offset = offset_for(node.side, config.nudge);
        match config.direction {
            RankDir::TopBottom => node.x += offset,
            RankDir::LeftRight => node.y += offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layered, layout_tree, Edge, GraphNode};

    fn chain() -> (Vec<GraphNode>, Vec<Edge>) {
        let node = |id: &str, side| GraphNode {
            id: id.to_string(),
            label: id.to_string(),
            side,
            tree_node: None,
        };
        (
            vec![node("1", Side::Root), node("1L", Side::Left), node("1LR", Side::Right)],
            vec![Edge::new("1", "1L"), Edge::new("1L", "1LR")],
        )
    }

    #[test]
    fn test_nudge_moves_children_only() {
        let (nodes, edges) = chain();
        let config = LayoutConfig::default();
        let plain = layered::layout(&nodes, &edges, &config).unwrap();
        let nudged = layout_tree(&nodes, &edges, &config).unwrap();

        assert_eq!(plain.nodes[0].x, nudged.nodes[0].x);
        assert_eq!(nudged.nodes[1].x, plain.nodes[1].x - config.nudge);
        assert_eq!(nudged.nodes[2].x, plain.nodes[2].x + config.nudge);
        for (a, b) in plain.nodes.iter().zip(&nudged.nodes) {
            assert_eq!(a.y, b.y);
            assert_eq!(a.rank, b.rank);
        }
    }

    #[test]
    fn test_zero_nudge_is_identity() {
        let (nodes, edges) = chain();
        let config = LayoutConfig {
            nudge: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            layered::layout(&nodes, &edges, &config).unwrap(),
            layout_tree(&nodes, &edges, &config).unwrap()
        );
    }

    #[test]
    fn test_oversized_nudge_rejected() {
        let (nodes, edges) = chain();
        let config = LayoutConfig {
            nudge: 80.0,
            ..LayoutConfig::default()
        };
        assert!(layout_tree(&nodes, &edges, &config).is_err());
    }
}
