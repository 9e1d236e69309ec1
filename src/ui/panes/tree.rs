//! Canvas drawing of the laid-out tree and the traversal result line

use crate::layout::{Layout, LayoutConfig};
use crate::snapshot::TraversalSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as Segment},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Everything the tree pane needs for one frame
pub struct TreeRenderData<'a> {
    pub layout: &'a Layout,
    pub config: &'a LayoutConfig,
    pub traversal: &'a TraversalSnapshot,
    pub title: &'a str,
    pub is_running: bool,
}

/// Canvas bounds around every node, y flipped so rank 0 is at the top
fn canvas_bounds(layout: &Layout, config: &LayoutConfig) -> ([f64; 2], [f64; 2]) {
    let pad = config.node_width.max(config.node_height);
    match layout.bounds() {
        Some((x0, y0, x1, y1)) => ([x0 - pad, x1 + pad], [-y1 - pad, -y0 + pad]),
        None => ([0.0, 1.0], [0.0, 1.0]),
    }
}

pub fn render_tree_pane(frame: &mut Frame, area: Rect, data: &TreeRenderData) {
    let border_style = if data.is_running {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = Block::default()
        .title(format!(" {} ", data.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if data.layout.is_empty() {
        let paragraph = Paragraph::new("(empty tree: type a number and press Enter, or l for a complete tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let (x_bounds, y_bounds) = canvas_bounds(data.layout, data.config);
    let current = data
        .traversal
        .current
        .and_then(|visit| data.layout.node_for(visit.node))
        .map(|node| node.id.as_str());
    let radius = data.config.node_width.min(data.config.node_height) * 0.3;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for edge in &data.layout.edges {
                let (Some(from), Some(to)) =
                    (data.layout.node(&edge.source), data.layout.node(&edge.target))
                else {
                    continue;
                };
                ctx.draw(&Segment {
                    x1: from.x,
                    y1: -from.y,
                    x2: to.x,
                    y2: -to.y,
                    color: DEFAULT_THEME.edge,
                });
            }
            ctx.layer();
            for node in &data.layout.nodes {
                let color = if Some(node.id.as_str()) == current {
                    DEFAULT_THEME.current
                } else {
                    DEFAULT_THEME.primary
                };
                ctx.draw(&Circle {
                    x: node.x,
                    y: -node.y,
                    radius,
                    color,
                });
                ctx.print(
                    node.x,
                    -node.y,
                    Span::styled(node.label.clone(), Style::default().fg(color)),
                );
            }
        });
    frame.render_widget(canvas, area);
}

/// One-line traversal progress or result, plus the pending input
pub fn render_result_pane(
    frame: &mut Frame,
    area: Rect,
    traversal: &TraversalSnapshot,
    result: Option<&str>,
    input: &str,
) {
    let block = Block::default()
        .title(" Traversal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut spans = Vec::new();
    match result {
        Some(summary) => spans.push(Span::styled(
            summary.to_string(),
            Style::default().fg(DEFAULT_THEME.success),
        )),
        None if !traversal.visited.is_empty() => spans.push(Span::styled(
            traversal.progress(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        None => spans.push(Span::styled(
            "p preorder, i inorder, o postorder",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    }
    if !input.is_empty() {
        spans.push(Span::styled("   insert: ", Style::default().fg(DEFAULT_THEME.comment)));
        spans.push(Span::styled(
            format!("{}_", input),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::session::TreeSession;

    #[test]
    fn test_bounds_cover_every_node() {
        let mut session = TreeSession::default();
        for v in [5, 3, 8] {
            session.insert(v).unwrap();
        }
        let (xs, ys) = canvas_bounds(session.layout(), session.config());
        for node in &session.layout().nodes {
            assert!(xs[0] < node.x && node.x < xs[1]);
            assert!(ys[0] < -node.y && -node.y < ys[1]);
        }
    }
}
