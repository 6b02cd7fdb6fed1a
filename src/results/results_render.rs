//! Results grid rendering
//!
//! One card per keyword: phrase and competition badge on the first line,
//! formatted search volume on the second. Cards flow left to right in one or
//! two columns depending on the pane width, and the grid scrolls by card row.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus};
use crate::input::PLACEHOLDER;
use crate::research::{Competition, KeywordResult};

/// Rows per card: two borders plus two content lines
pub const CARD_HEIGHT: u16 = 4;

const ELLIPSIS: &str = "…";

/// Number of card columns for a pane of `inner_width` cells
pub fn card_columns(inner_width: u16, two_column_min_width: u16) -> u16 {
    if inner_width >= two_column_min_width { 2 } else { 1 }
}

/// Badge palette: green, yellow and red for Low, Medium and High
pub fn competition_style(level: Competition) -> Style {
    let (fg, bg) = match level {
        Competition::Low => (Color::Black, Color::Green),
        Competition::Medium => (Color::Black, Color::Yellow),
        Competition::High => (Color::White, Color::Red),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

/// Render the results pane
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::ResultsPane {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let results = app.search.results();
    let title = match app.search.results_query() {
        Some(query) if !results.is_empty() => {
            format!(" Results ({}) for \"{}\" ", results.len(), query)
        }
        _ => " Results ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if results.is_empty() {
        let message = if app.search.is_loading() {
            Paragraph::new("Generating keywords...").style(Style::default().fg(Color::Yellow))
        } else {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(message.alignment(Alignment::Center), inner);
        return;
    }

    let columns = card_columns(inner.width, app.two_column_min_width);
    let total_rows = results.len().div_ceil(columns as usize) as u32;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1);
    app.results_scroll.update_bounds(total_rows, visible_rows);

    let first_row = app.results_scroll.offset as usize;
    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns as usize];

    for visible_row in 0..visible_rows {
        let y = inner.y + visible_row * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let cells = Layout::horizontal(column_constraints.clone()).split(row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = (first_row + visible_row as usize) * columns as usize + col;
            let Some(result) = results.get(index) else {
                return;
            };
            render_card(result, frame, *cell);
        }
    }
}

fn render_card(result: &KeywordResult, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner_width = block.inner(area).width as usize;

    let badge = format!(" {} ", result.competition_level.label());
    let badge_width = badge.width();
    let phrase_budget = inner_width.saturating_sub(badge_width + 1);
    let phrase = truncate_to_width(&result.phrase, phrase_budget);
    let gap = inner_width.saturating_sub(phrase.width() + badge_width);

    let header = Line::from(vec![
        Span::styled(
            phrase,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(badge, competition_style(result.competition_level)),
    ]);
    let volume = Line::from(Span::styled(
        format!("Search Volume: {}", result.formatted_volume()),
        Style::default().fg(Color::Gray),
    ));

    frame.render_widget(Paragraph::new(vec![header, volume]).block(block), area);
}

/// Cut `text` to at most `max_width` display cells, ending in `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
