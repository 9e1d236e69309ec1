use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue, idle bars and nodes
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green, marker and sorted state
    pub error: Color,     // Red, comparisons
    pub merge: Color,     // Yellow, ranges being merged
    pub current: Color,   // Node highlighted by a traversal
    pub edge: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    merge: Color::Rgb(249, 226, 175),
    current: Color::Rgb(249, 226, 175),
    edge: Color::Rgb(88, 91, 112),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
