use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::help::{help_line_render, help_popup_render};
use crate::input::input_render;
use crate::results::results_render;

pub const TITLE: &str = "Free AI Keyword Research Tool";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, input_area, results_area, help_area] = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Keyword field and submit control
            Constraint::Min(3),    // Results grid takes the rest
            Constraint::Length(1), // Help line
        ])
        .areas(frame.area());

        let title = Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(title, title_area);

        input_render::render_row(self, frame, input_area);
        results_render::render_pane(self, frame, results_area);
        help_line_render::render_line(self, frame, help_area);

        // Popups render last so they float above everything
        if self.help.visible {
            help_popup_render::render_popup(self, frame);
        }
    }
}
