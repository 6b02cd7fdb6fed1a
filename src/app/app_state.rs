use crate::config::Config;
use crate::help::HelpPopupState;
use crate::input::InputState;
use crate::research::{BoxedSource, SearchBatch};
use crate::scroll::ScrollState;
use crate::search::{SearchState, SubmitOutcome};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

/// What to output when exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Results, // Print the current batch as JSON (Ctrl+O)
    Query,   // Print the query string only (Ctrl+Q)
}

/// Application state
pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub results_scroll: ScrollState,
    pub help: HelpPopupState,
    pub focus: Focus,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// One-off message shown in place of the help line
    pub notice: Option<String>,
    pub two_column_min_width: u16,
}

impl App {
    /// Create a new App with its search worker
    pub fn new(config: &Config, source: BoxedSource) -> Self {
        Self {
            input: InputState::new(),
            search: SearchState::new(config.search.delay(), source),
            results_scroll: ScrollState::new(),
            help: HelpPopupState::new(),
            focus: Focus::InputField,
            output_mode: None,
            should_quit: false,
            notice: None,
            two_column_min_width: config.ui.two_column_min_width,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Current query text, untrimmed
    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Replace the query text
    pub fn set_query(&mut self, text: &str) {
        self.input.set_query(text);
    }

    /// Submit the current query
    pub fn submit(&mut self) -> SubmitOutcome {
        let query = self.input.query().to_string();
        self.search.submit(&query)
    }

    /// Apply finished searches; returns true when a redraw is needed
    pub fn poll_search(&mut self) -> bool {
        let changed = self.search.poll_response();
        if changed {
            self.results_scroll.reset();
            if !self.search.has_results() {
                self.focus = Focus::InputField;
            }
        }
        changed
    }

    /// The displayed batch with the query that produced it
    pub fn current_batch(&self) -> Option<SearchBatch> {
        let query = self.search.results_query()?;
        if !self.search.has_results() {
            return None;
        }
        Some(SearchBatch::new(query, self.search.results().to_vec()))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
