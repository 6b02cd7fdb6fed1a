use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus, OutputMode};
use crate::results::results_events;

/// How long to wait for input before polling the search worker again
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Handle at most one terminal event
    ///
    /// Returns after `EVENT_POLL_INTERVAL` when no event arrives, so the
    /// caller can pick up finished searches.
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    /// Handle pasted text into the query field
    pub fn handle_paste_event(&mut self, text: String) {
        // Help popup swallows input while visible
        if self.help.visible {
            return;
        }
        self.focus = Focus::InputField;
        self.input.insert_text(&text);
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.notice = None;

        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => results_events::handle_results_pane_key(self, key),
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup blocks every other key while visible
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.close();
                }
                KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
                _ => {}
            }
            return true;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('o') if ctrl => {
                self.output_mode = Some(OutputMode::Results);
                self.should_quit = true;
                true
            }
            KeyCode::Char('q') if ctrl => {
                self.output_mode = Some(OutputMode::Query);
                self.should_quit = true;
                true
            }
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            _ => false,
        }
    }

    /// Handle keys when the query field is focused
    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                let outcome = self.submit();
                log::debug!("Submit: {:?}", outcome);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if self.search.has_results() {
                    self.focus = Focus::ResultsPane;
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.set_query("");
            }
            // Multi-line editing keys would break the single-line field
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                self.input.textarea.input(key);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
