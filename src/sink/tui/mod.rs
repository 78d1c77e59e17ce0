//! Terminal dashboard sink

mod app;
mod ui;

pub use app::{TuiApp, ViewConfig};
pub use ui::draw;

use super::{RenderSink, SinkError};
use crate::driver::DashboardFrame;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// Draws each frame into a ratatui terminal
pub struct TuiSink<B: Backend> {
    terminal: Terminal<B>,
    app: TuiApp,
    listen_for_keys: bool,
}

impl<B: Backend> TuiSink<B> {
    /// Create a sink over `terminal`. With `listen_for_keys` the sink polls
    /// crossterm for `q`, `Esc` or Ctrl-C between cycles.
    pub fn new(terminal: Terminal<B>, view: ViewConfig, listen_for_keys: bool) -> Self {
        Self {
            terminal,
            app: TuiApp {
                view,
                ..Default::default()
            },
            listen_for_keys,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> RenderSink for TuiSink<B> {
    fn render(&mut self, frame: &DashboardFrame) -> Result<(), SinkError> {
        self.app.frame = Some(frame.clone());
        let app = &self.app;
        match self.terminal.draw(|f| draw(f, app)) {
            Ok(_) => Ok(()),
            Err(e) => {
                self.app.render_failures += 1;
                Err(SinkError::Io(e))
            }
        }
    }

    fn quit_requested(&mut self) -> Result<bool, SinkError> {
        if !self.listen_for_keys {
            return Ok(false);
        }

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true)
                    }
                    _ => {}
                }
            }
        }
        Ok(false)
    }
}
