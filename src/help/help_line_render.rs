//! Help line rendering
//!
//! Context-aware shortcut hints at the bottom of the screen. A pending
//! notice (such as a config warning) takes the line's place.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

pub fn help_text(app: &App) -> &'static str {
    match app.focus {
        Focus::InputField if app.search.is_loading() => {
            " F1: Help | Generating keywords... | Ctrl+C: Quit"
        }
        Focus::InputField if app.search.has_results() => {
            " F1: Help | Enter: Search | Tab: Results | Ctrl+O: Print JSON | Ctrl+C: Quit"
        }
        Focus::InputField => " F1: Help | Enter: Search | Ctrl+C: Quit",
        Focus::ResultsPane => {
            " ?: Help | j/k: Scroll | Tab: Keyword | Ctrl+O: Print JSON | q: Quit"
        }
    }
}

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.notice {
        Some(notice) => {
            Paragraph::new(format!(" {}", notice)).style(Style::default().fg(Color::Yellow))
        }
        None => Paragraph::new(help_text(app)).style(Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{submit_and_wait, test_app};

    #[test]
    fn test_input_help_without_results() {
        let app = test_app();
        let text = help_text(&app);
        assert!(text.contains("Enter: Search"));
        assert!(!text.contains("Tab: Results"));
    }

    #[test]
    fn test_input_help_with_results_mentions_tab() {
        let mut app = test_app();
        submit_and_wait(&mut app, "seo");
        assert!(help_text(&app).contains("Tab: Results"));
    }

    #[test]
    fn test_results_help_mentions_scroll() {
        let mut app = test_app();
        app.focus = Focus::ResultsPane;
        assert!(help_text(&app).contains("j/k: Scroll"));
    }
}
