use crate::snapshot::ElementState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub element_idle: Color,
    pub element_comparing: Color,
    pub element_swapped: Color,
}

impl Theme {
    pub fn element_color(&self, state: ElementState) -> Color {
        match state {
            ElementState::Idle => self.element_idle,
            ElementState::Comparing => self.element_comparing,
            ElementState::Swapped => self.element_swapped,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border while editing
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    element_idle: Color::Rgb(137, 180, 250),      // Blue
    element_comparing: Color::Rgb(166, 227, 161), // Green
    element_swapped: Color::Rgb(243, 139, 168),   // Red
};
