use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('i') | KeyCode::Esc => {
            app.focus = Focus::InputField;
        }

        KeyCode::Char('?') => app.help.toggle(),

        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Down | KeyCode::Char('j') => app.results_scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.results_scroll.scroll_up(1),

        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.results_scroll.page_down();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.results_scroll.page_up();
        }
        KeyCode::PageDown => app.results_scroll.page_down(),
        KeyCode::PageUp => app.results_scroll.page_up(),

        KeyCode::Char('g') | KeyCode::Home => app.results_scroll.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.results_scroll.jump_to_bottom(),

        _ => {}
    }
}

#[cfg(test)]
#[path = "results_events_tests.rs"]
mod results_events_tests;
