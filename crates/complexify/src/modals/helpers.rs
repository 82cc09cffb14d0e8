//! Shared rendering helpers for modal widgets.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

/// Result of rendering a modal frame, containing layout information.
pub struct ModalFrame {
    /// The layout chunks for content placement
    pub chunks: Rc<[Rect]>,
}

/// Render a standard modal frame: centered, cleared background, bordered
/// block with title, and a vertical layout for the content.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

/// Builder for the key-hint line at the bottom of a modal.
pub struct HelpText {
    spans: Vec<Span<'static>>,
}

impl HelpText {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn key(mut self, key: &str, color: Color, description: &str) -> Self {
        if !self.spans.is_empty() {
            self.spans.push(Span::raw(" "));
        }
        self.spans
            .push(Span::styled(key.to_string(), Style::default().fg(color)));
        self.spans.push(Span::raw(format!(" {description}")));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(Line::from(self.spans)).alignment(Alignment::Center)
    }
}
