//! Sequence input pane

use crate::sequence::{MAX_INPUT_LEN, MAX_VALUE, MIN_INPUT_LEN, MIN_VALUE};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Data needed to render the input pane
pub struct InputRenderData<'a> {
    pub buffer: &'a str,
    pub is_editing: bool,
    /// Validation message from the last rejected submission
    pub error: Option<&'a str>,
}

/// Height the input pane needs, borders included
pub fn input_pane_height(has_error: bool) -> u16 {
    if has_error {
        4
    } else {
        3
    }
}

/// Render the input pane
pub fn render_input_pane(frame: &mut Frame, area: Rect, data: InputRenderData) {
    let border_style = if data.is_editing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Sequence ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let mut lines = Vec::new();

    if data.is_editing {
        lines.push(Line::from(vec![
            Span::styled(data.buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                "█",
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "Press i to enter {}-{} numbers between {} and {}, separated by commas (e.g. 5,2,8,1)",
                MIN_INPUT_LEN, MAX_INPUT_LEN, MIN_VALUE, MAX_VALUE
            ),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    if let Some(error) = data.error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
