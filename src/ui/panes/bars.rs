//! Bar chart of the array being sorted

use crate::snapshot::SortSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Colour of the bar at `index`; comparisons win over the marker, the
/// marker over merge ranges
pub fn bar_color(snapshot: &SortSnapshot, index: usize) -> Color {
    if snapshot.comparing.contains(&index) {
        DEFAULT_THEME.error
    } else if snapshot.marker == Some(index) {
        DEFAULT_THEME.success
    } else if snapshot.merging.iter().any(|r| r.contains(index)) {
        DEFAULT_THEME.merge
    } else {
        DEFAULT_THEME.primary
    }
}

/// Width of each bar so that `count` bars with one column gaps fill `width`
fn bar_width(width: u16, count: usize) -> u16 {
    let count = count.max(1) as u16;
    let gaps = count.saturating_sub(1);
    (width.saturating_sub(gaps) / count).clamp(1, 9)
}

pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    snapshot: &SortSnapshot,
    is_running: bool,
) {
    let border_style = if is_running {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if snapshot.array.is_empty() {
        let paragraph = Paragraph::new("(empty array, press r)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Heights are measured from the smallest value so negatives still show
    let floor = snapshot.array.iter().copied().min().unwrap_or(0).min(0);
    let bars: Vec<Bar> = snapshot
        .array
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = bar_color(snapshot, i);
            Bar::default()
                .value(value.saturating_sub(floor).unsigned_abs() + 1)
                .text_value(value.to_string())
                .label(Line::from(i.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color).fg(Color::Black))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width(inner_width, bars.len()))
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}
