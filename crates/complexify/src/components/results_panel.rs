//! Analysis results pane: the five display targets, the loading indicator,
//! and the empty-state hint.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Component, EventResult};
use crate::state::AppState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ResultsPanel;

impl ResultsPanel {
    pub fn new() -> Self {
        Self
    }

    fn metric_line(label: &'static str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(value.to_string()),
        ])
    }
}

impl Component for ResultsPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" ANALYSIS ");

        if state.status.is_running() {
            let spinner = SPINNER_FRAMES[state.spinner_tick % SPINNER_FRAMES.len()];
            let loading = Paragraph::new(Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Cyan)),
                Span::raw(" Analyzing, waiting for the service..."),
            ]))
            .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if !state.results.visible {
            let hint = Paragraph::new(Span::styled(
                "No results yet. Press Ctrl+R to analyze the code on the left.",
                Style::default().fg(Color::DarkGray),
            ))
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let results = &state.results;
        let lines = vec![
            Self::metric_line("Time complexity: ", &results.time_complexity),
            Self::metric_line("Space complexity: ", &results.space_complexity),
            Self::metric_line("Cyclomatic complexity: ", &results.cyclomatic_complexity),
            Self::metric_line("Readability score: ", &results.readability_score),
            Line::default(),
            Line::from(Span::styled(
                "Optimization suggestions",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(results.optimization_suggestions.clone()),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
