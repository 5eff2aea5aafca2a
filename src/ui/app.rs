//! Main TUI application state and logic

use crate::chart::{CallPhase, ChartDescription};
use crate::render::Attribution;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Everything one screen needs
pub struct View<'a> {
    pub chart: Option<&'a ChartDescription>,
    pub phase: CallPhase,
    pub message: &'a str,
    pub current: usize,
    pub total: usize,
    pub attribution: Option<&'a Attribution>,
}

/// Draw the chart pane, frame pane and status bar
pub fn draw(frame: &mut Frame, view: &View) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[0]);

    super::panes::render_chart_pane(frame, columns[0], view.chart, view.phase);
    super::panes::render_frame_pane(frame, columns[1], view.chart, view.phase);
    super::panes::render_status_bar(
        frame,
        main_chunks[1],
        super::panes::StatusRenderData {
            message: view.message,
            current: view.current,
            total: view.total,
            clipped: view.chart.is_some_and(ChartDescription::is_clipped),
            attribution: view.attribution,
        },
    );
}

/// The main application state
pub struct App {
    pub charts: Vec<ChartDescription>,

    /// Index of the chart on screen
    pub current: usize,

    /// Column listed in the frame pane
    pub phase: CallPhase,

    pub attribution: Option<Attribution>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(charts: Vec<ChartDescription>, attribution: Option<Attribution>) -> Self {
        App {
            charts,
            current: 0,
            phase: CallPhase::DuringCall,
            attribution,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        draw(
            frame,
            &View {
                chart: self.charts.get(self.current),
                phase: self.phase,
                message: &self.status_message,
                current: self.current,
                total: self.charts.len(),
                attribution: self.attribution.as_ref(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.phase = self.phase.prev();
                self.status_message = format!("Showing {}", self.phase.label());
            }
            KeyCode::Right => {
                self.phase = self.phase.next();
                self.status_message = format!("Showing {}", self.phase.label());
            }
            KeyCode::Tab => self.select(self.current + 1),
            KeyCode::BackTab => self.select(self.current + self.charts.len().max(1) - 1),
            _ => {}
        }
    }

    fn select(&mut self, index: usize) {
        if self.charts.is_empty() {
            self.status_message = "No charts loaded".to_string();
            return;
        }
        self.current = index % self.charts.len();
        let chart = &self.charts[self.current];
        self.status_message = format!("{} ({} byte frame)", chart.target, chart.frame_size);
    }
}
