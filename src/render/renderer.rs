use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::Canvas;
use crate::metrics::SessionMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &Canvas, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let (width, height) = canvas.size();
        let arena = centered(chunks[0], width + 2, height + 2);

        let block = self.render_block(metrics);
        let inner = block.inner(arena);
        frame.render_widget(block, arena);
        frame.render_widget(canvas, inner);

        frame.render_widget(self.render_controls(), chunks[1]);
    }

    fn render_block(&self, metrics: &SessionMetrics) -> Block<'_> {
        let title = Line::from(vec![
            Span::styled(
                " Snake ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("length ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.length.to_string(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw(" "),
        ]);

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(title)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` × `height` rectangle centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
