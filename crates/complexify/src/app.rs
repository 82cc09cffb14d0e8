use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::{
    Component, editor::CodeEditor, results_panel::ResultsPanel, status_bar::StatusBar,
};
use crate::controller;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::state::{AppState, ModalState};
use crate::worker::AnalysisWorker;

/// How long to wait for input before giving the worker pump and the spinner
/// a turn
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    worker: AnalysisWorker,
    editor: CodeEditor,
    results_panel: ResultsPanel,
    status_bar: StatusBar,
}

impl App {
    pub fn new(endpoint: String, worker: AnalysisWorker) -> Self {
        Self {
            state: AppState::new(endpoint),
            worker,
            editor: CodeEditor::new(),
            results_panel: ResultsPanel::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_worker_outcomes();
            self.handle_events()?;

            if self.state.status.is_running() {
                self.state.spinner_tick = self.state.spinner_tick.wrapping_add(1);
            }
        }
        Ok(())
    }

    /// Fold finished requests back into the view state
    fn process_worker_outcomes(&mut self) {
        while let Some(outcome) = self.worker.try_recv() {
            controller::absorb_outcome(&mut self.state, outcome);
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: header, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);

        // Content: editor on the left, results on the right
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(chunks[1]);

        self.editor.render(frame, panes[0], &self.state);
        self.results_panel.render(frame, panes[1], &self.state);

        self.status_bar.render(frame, chunks[2], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "Complexify",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  code analysis via "),
            Span::styled(
                self.state.endpoint.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        // Poll with a timeout so worker outcomes are picked up while a
        // request is in flight
        if !event::poll(INPUT_POLL_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            if handle_modal_key(key_event, &mut self.state) == ModalResult::Dismissed {
                self.state.modal = ModalState::None;
            }
            return;
        }

        // Global key bindings
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            match key_event.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.state.exit = true;
                    return;
                }
                KeyCode::Char('r') => {
                    controller::submit_analysis(&mut self.state, &self.worker);
                    return;
                }
                _ => {}
            }
        }

        let _ = self.editor.handle_key(key_event, &mut self.state);
    }
}
