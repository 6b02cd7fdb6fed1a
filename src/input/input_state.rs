use ratatui::style::{Color, Modifier, Style};
use tui_textarea::TextArea;

use super::PLACEHOLDER;

/// Single-line query field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole query, untrimmed
    ///
    /// Line breaks become spaces so the field stays single-line.
    pub fn set_query(&mut self, text: &str) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(single_line(text));
    }

    /// Insert text at the cursor (paste)
    pub fn insert_text(&mut self, text: &str) {
        self.textarea.insert_str(single_line(text));
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
