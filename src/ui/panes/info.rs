//! Info panel: how bubble sort works and what it costs

use crate::sorter::SortStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const DESCRIPTION: &str = "Bubble Sort is a simple sorting algorithm that repeatedly steps \
through the list, compares adjacent elements and swaps them if they are in the wrong order.";

/// Height the info pane needs, borders included
pub const INFO_PANE_HEIGHT: u16 = 9;

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, stats: SortStats, len: usize) {
    let block = Block::default()
        .title(" About Bubble Sort ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let description = Paragraph::new(DESCRIPTION)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    let heading = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(DEFAULT_THEME.fg);

    let time = vec![
        Line::from(Span::styled("Time Complexity", heading)),
        Line::from(Span::styled("• Best Case: O(n)", body)),
        Line::from(Span::styled("• Average Case: O(n²)", body)),
        Line::from(Span::styled("• Worst Case: O(n²)", body)),
    ];
    frame.render_widget(Paragraph::new(time), columns[0]);

    let space = vec![
        Line::from(Span::styled("Space Complexity", heading)),
        Line::from(Span::styled("• O(1): one extra slot", body)),
        Line::from(Span::styled("  for swapping", body)),
    ];
    frame.render_widget(Paragraph::new(space), columns[1]);

    // At most `len` passes of `len - 1` comparisons each
    let bound = len * len.saturating_sub(1);
    let progress = vec![
        Line::from(Span::styled("This Run", heading)),
        Line::from(Span::styled(
            format!("• Comparisons: {} (max {})", stats.comparisons, bound),
            body,
        )),
        Line::from(Span::styled(format!("• Swaps: {}", stats.swaps), body)),
        Line::from(Span::styled(format!("• Passes: {}", stats.passes), body)),
    ];
    frame.render_widget(Paragraph::new(progress), columns[2]);
}
