//! Source code input pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;

pub struct CodeEditor;

impl CodeEditor {
    pub fn new() -> Self {
        Self
    }
}

/// Render one line with the cursor shown as a reversed cell at `cursor_col`
fn cursor_line(line: &str, cursor_col: usize) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let mut spans = Vec::new();

    for (i, c) in line.chars().enumerate() {
        if i == cursor_col {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    // Cursor sits past the end of the line
    if cursor_col >= line.chars().count() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

impl Component for CodeEditor {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let editor = &mut state.editor;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.insert_char(c)
            }
            KeyCode::Enter => editor.insert_newline(),
            KeyCode::Tab => editor.insert_tab(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete(),
            KeyCode::Left => editor.move_left(),
            KeyCode::Right => editor.move_right(),
            KeyCode::Up => editor.move_up(),
            KeyCode::Down => editor.move_down(),
            KeyCode::Home => editor.move_home(),
            KeyCode::End => editor.move_end(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" SOURCE CODE ");
        let inner_height = block.inner(area).height as usize;

        // Keep the cursor row in view
        let scroll = state
            .editor
            .cursor_row
            .saturating_sub(inner_height.saturating_sub(1));

        let lines: Vec<Line> = state
            .editor
            .lines
            .iter()
            .enumerate()
            .skip(scroll)
            .take(inner_height.max(1))
            .map(|(row, line)| {
                if row == state.editor.cursor_row {
                    cursor_line(line, state.editor.cursor_col)
                } else {
                    Line::from(line.clone())
                }
            })
            .collect();

        let paragraph = Paragraph::new(Text::from(lines)).block(block);
        frame.render_widget(paragraph, area);
    }
}
