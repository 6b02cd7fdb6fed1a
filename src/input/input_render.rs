//! Input row rendering
//!
//! The query field on the left and the submit control on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_LABEL: &str = "Generating...";
pub const BUTTON_WIDTH: u16 = 17;

/// Label of the submit control for the given loading flag
pub fn button_label(loading: bool) -> &'static str {
    if loading { LOADING_LABEL } else { SEARCH_LABEL }
}

/// Render the query field and submit control
pub fn render_row(app: &mut App, frame: &mut Frame, area: Rect) {
    let [field_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)]).areas(area);

    render_field(app, frame, field_area);
    render_button(app.search.is_loading(), frame, button_area);
}

/// Render the query field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::InputField {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keyword ")
            .border_style(Style::default().fg(border_color)),
    );

    // Hide the cursor block when the field is not focused
    let cursor_style = if app.focus == Focus::InputField {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, area);
}

/// Render the submit control, dimmed while a search is loading
pub fn render_button(loading: bool, frame: &mut Frame, area: Rect) {
    let (label_style, border_style) = if loading {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Blue),
        )
    };

    let button = Paragraph::new(button_label(loading))
        .alignment(Alignment::Center)
        .style(label_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(button, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
