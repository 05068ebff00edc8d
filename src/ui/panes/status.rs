//! Status bar rendering with keybindings and state indicators

use crate::ui::app::AppState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub state: AppState,
    pub message: &'a str,
    pub speed: Duration,
    pub sound: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let badge_bg = match data.state {
        AppState::Ready => DEFAULT_THEME.primary,
        AppState::Playing => DEFAULT_THEME.secondary,
        AppState::Paused => DEFAULT_THEME.warning,
        AppState::Sorted => DEFAULT_THEME.success,
        AppState::Input => DEFAULT_THEME.border_focused,
    };

    let left_spans = vec![
        Span::styled(
            format!(" {} ", data.state.label()),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let keys: &[(&str, &str)] = if data.state == AppState::Input {
        &[(" ↵ ", " set "), (" esc ", " cancel ")]
    } else {
        &[
            (" ⎵ ", " play "),
            (" → ", " step "),
            (" r ", " reset "),
            (" i ", " input "),
            (" v ", " view "),
            (" ? ", " info "),
            (" +/- ", " speed "),
            (" q ", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        format!(" {}ms {} ", data.speed.as_millis(), if data.sound { "♪" } else { "∅" }),
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.comment),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
