//! Help popup rendering
//!
//! Centered modal listing keyboard shortcuts.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::widgets::popup;

pub const HELP_POPUP_WIDTH: u16 = 60;
pub const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 8 {
        return;
    }

    let ideal_height = HELP_ENTRIES.len() as u16 + HELP_POPUP_PADDING;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, ideal_height);

    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();

    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            lines.push(Line::from(""));
        } else if key.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    *desc,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<15}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )));

    let content_height = lines.len() as u32;
    let visible_height = popup_area.height.saturating_sub(2);
    app.help.scroll.update_bounds(content_height, visible_height);

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((app.help.scroll.offset, 0));

    frame.render_widget(popup, popup_area);
}
