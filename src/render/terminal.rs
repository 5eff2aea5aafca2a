//! One-shot rendering onto a ratatui terminal

use super::{Attribution, ChartRenderer};
use crate::chart::{CallPhase, ChartDescription};
use crate::ui::app::{draw, View};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Draws each chart it receives onto `terminal`, replacing the previous one
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    chart: Option<ChartDescription>,
    attribution: Option<Attribution>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TerminalRenderer {
            terminal,
            chart: None,
            attribution: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn redraw(&mut self) -> io::Result<()> {
        let view = View {
            chart: self.chart.as_ref(),
            phase: CallPhase::DuringCall,
            message: "",
            current: 0,
            total: usize::from(self.chart.is_some()),
            attribution: self.attribution.as_ref(),
        };
        self.terminal.draw(|f| draw(f, &view))?;
        Ok(())
    }
}

impl<B: Backend> ChartRenderer for TerminalRenderer<B> {
    type Error = io::Error;

    fn render(&mut self, chart: ChartDescription) -> io::Result<()> {
        self.chart = Some(chart);
        self.attribution = None;
        self.redraw()
    }

    fn append_link(&mut self, target: &str, link: Attribution) -> io::Result<()> {
        if self.chart.as_ref().map(|c| c.target.as_str()) != Some(target) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no chart rendered for '{}'", target),
            ));
        }
        self.attribution = Some(link);
        self.redraw()
    }
}
