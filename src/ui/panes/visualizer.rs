//! Sequence visualization pane
//!
//! Draws the displayed sequence in one of three styles:
//!
//! - **Bars**: a bar chart scaled against [`MAX_VALUE`]
//! - **Circles**: one circle per element, radius proportional to the value
//! - **Squares**: one square per element, side proportional to the value
//!
//! Each element is colored from the current step's [`ElementState`]: idle,
//! being compared, or just swapped.
//!
//! Circles and squares are drawn on a braille canvas. Canvas units are chosen
//! so one x unit is a cell width and one y unit is half a cell height, which
//! keeps shapes roughly round/square on a typical terminal font.

use crate::config::VisualStyle;
use crate::sequence::MAX_VALUE;
use crate::snapshot::{ElementState, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Rectangle},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};

/// Data needed to render the visualizer pane
pub struct VisualizerRenderData<'a> {
    /// Values to draw, in order
    pub values: &'a [u8],
    /// The last step produced, used for highlighting
    pub step: Option<&'a Step>,
    pub style: VisualStyle,
}

impl VisualizerRenderData<'_> {
    fn state_of(&self, index: usize) -> ElementState {
        self.step
            .map_or(ElementState::Idle, |step| step.element_state(index))
    }
}

/// Render the visualizer pane
pub fn render_visualizer_pane(frame: &mut Frame, area: Rect, data: VisualizerRenderData) {
    let block = Block::default()
        .title(format!(" Bubble Sort Visualizer · {} ", data.style.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.values.is_empty() || inner.width == 0 || inner.height == 0 {
        let paragraph =
            Paragraph::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, inner);
        return;
    }

    match data.style {
        VisualStyle::Bars => render_bars(frame, inner, &data),
        VisualStyle::Circles | VisualStyle::Squares => render_shapes(frame, inner, &data),
    }
}

fn render_bars(frame: &mut Frame, area: Rect, data: &VisualizerRenderData) {
    let count = data.values.len() as u16;
    let (bar_width, bar_gap) = bar_layout(area.width, count);

    let bars: Vec<Bar> = data
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = DEFAULT_THEME.element_color(data.state_of(i));
            Bar::default()
                .value(u64::from(value))
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Center the chart horizontally
    let used = (bar_width * count + bar_gap * count.saturating_sub(1)).min(area.width);
    let chart_area = Rect {
        x: area.x + (area.width - used) / 2,
        width: used,
        ..area
    };

    let chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(MAX_VALUE))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, chart_area);
}

fn render_shapes(frame: &mut Frame, area: Rect, data: &VisualizerRenderData) {
    let width = f64::from(area.width);
    let height = f64::from(area.height) * 2.0;
    let centers = slot_centers(data.values.len(), width);
    let slot = width / data.values.len() as f64;
    let center_y = height / 2.0;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for (i, (&value, &cx)) in data.values.iter().zip(centers.iter()).enumerate() {
                let color = DEFAULT_THEME.element_color(data.state_of(i));
                match data.style {
                    VisualStyle::Circles => {
                        let max_radius = (slot / 2.0).min(height / 2.0) - 0.5;
                        ctx.draw(&Circle {
                            x: cx,
                            y: center_y,
                            radius: scaled_extent(value, max_radius, 0.5),
                            color,
                        });
                    }
                    _ => {
                        let max_side = slot.min(height) - 1.0;
                        let side = scaled_extent(value, max_side, 1.0);
                        ctx.draw(&Rectangle {
                            x: cx - side / 2.0,
                            y: center_y - side / 2.0,
                            width: side,
                            height: side,
                            color,
                        });
                    }
                }
            }

            for (i, (&value, &cx)) in data.values.iter().zip(centers.iter()).enumerate() {
                let label = value.to_string();
                let color = DEFAULT_THEME.element_color(data.state_of(i));
                ctx.print(
                    cx - label.len() as f64 / 2.0,
                    center_y,
                    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Bar width and gap that fit `count` bars into `width` cells.
///
/// Prefers a one-cell gap between bars and drops it when the bars would
/// otherwise shrink to nothing.
pub(crate) fn bar_layout(width: u16, count: u16) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let with_gap = (width + 1) / count;
    if with_gap >= 2 {
        (with_gap - 1, 1)
    } else {
        ((width / count).max(1), 0)
    }
}

/// Horizontal centers of `count` equal slots spanning `width`
pub(crate) fn slot_centers(count: usize, width: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let slot = width / count as f64;
    (0..count).map(|i| slot * (i as f64 + 0.5)).collect()
}

/// Size proportional to `value / MAX_VALUE`, never below `min_extent`
pub(crate) fn scaled_extent(value: u8, max_extent: f64, min_extent: f64) -> f64 {
    let scaled = max_extent * f64::from(value) / f64::from(MAX_VALUE);
    scaled.max(min_extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_bar_layout_keeps_gap_when_room() {
        // 20 bars of width 3 plus 19 gaps is exactly 79 cells
        assert_eq!(bar_layout(79, 20), (3, 1));
        assert_eq!(bar_layout(100, 20), (4, 1));
    }

    #[test]
    fn test_bar_layout_drops_gap_when_tight() {
        assert_eq!(bar_layout(30, 30), (1, 0));
        assert_eq!(bar_layout(10, 30), (1, 0));
        assert_eq!(bar_layout(10, 0), (1, 0));
    }

    #[test]
    fn test_slot_centers() {
        assert_eq!(slot_centers(4, 40.0), vec![5.0, 15.0, 25.0, 35.0]);
        assert!(slot_centers(0, 40.0).is_empty());
    }

    #[test]
    fn test_scaled_extent() {
        assert_eq!(scaled_extent(50, 10.0, 0.5), 10.0);
        assert_eq!(scaled_extent(25, 10.0, 0.5), 5.0);
        // Tiny values still get something visible
        assert_eq!(scaled_extent(1, 10.0, 0.5), 0.5);
    }

    #[test]
    fn test_renders_every_style() {
        let values = [5, 50, 1, 23];
        let step = Step::comparison(values.to_vec(), 1);
        for style in [VisualStyle::Bars, VisualStyle::Circles, VisualStyle::Squares] {
            let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
            terminal
                .draw(|f| {
                    render_visualizer_pane(
                        f,
                        f.area(),
                        VisualizerRenderData {
                            values: &values,
                            step: Some(&step),
                            style,
                        },
                    )
                })
                .unwrap();

            let buffer = terminal.backend().buffer().clone();
            let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
            assert!(text.contains(style.label()), "missing title for {:?}", style);
            assert!(text.contains("50"), "missing value label for {:?}", style);
        }
    }
}
