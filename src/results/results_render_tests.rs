//! Tests for results grid rendering

use super::*;
use crate::research::ScriptedSource;
use crate::test_utils::test_helpers::{
    find_text, render_buffer, render_with, submit_and_wait, test_app, test_app_with_source,
};
use proptest::prelude::*;

fn render_pane_to_string(app: &mut App, width: u16, height: u16) -> String {
    render_with(width, height, |f| {
        let area = f.area();
        render_pane(app, f, area);
    })
}

fn scripted_app() -> App {
    test_app_with_source(Box::new(ScriptedSource::new(
        vec![1234, 10999, 1000],
        vec![Competition::Low, Competition::Medium, Competition::High],
    )))
}

#[test]
fn test_card_columns_threshold() {
    assert_eq!(card_columns(79, 80), 1);
    assert_eq!(card_columns(80, 80), 2);
    assert_eq!(card_columns(200, 80), 2);
}

#[test]
fn test_competition_palette() {
    assert_eq!(competition_style(Competition::Low).bg, Some(Color::Green));
    assert_eq!(competition_style(Competition::Medium).bg, Some(Color::Yellow));
    assert_eq!(competition_style(Competition::High).bg, Some(Color::Red));
}

#[test]
fn test_card_badges_use_competition_colors() {
    let mut app = scripted_app();
    submit_and_wait(&mut app, "seo");

    // Three card rows: Low, Medium, High
    let buffer = render_buffer(60, 14, |f| {
        let area = f.area();
        render_pane(&mut app, f, area);
    });

    for (label, fg, bg) in [
        (" Low ", Color::Black, Color::Green),
        (" Medium ", Color::Black, Color::Yellow),
        (" High ", Color::White, Color::Red),
    ] {
        let (x, y) = find_text(&buffer, label).expect("badge rendered");
        for offset in 0..label.len() as u16 {
            let cell = &buffer[(x + offset, y)];
            assert_eq!(cell.bg, bg, "badge {:?} background", label);
            assert_eq!(cell.fg, fg, "badge {:?} foreground", label);
        }
    }

    // Phrase text next to the badge stays unhighlighted
    let (x, y) = find_text(&buffer, "seo tool").expect("phrase rendered");
    assert_eq!(buffer[(x, y)].bg, Color::Reset);
}

#[test]
fn test_empty_pane_shows_placeholder() {
    let mut app = test_app();
    let output = render_pane_to_string(&mut app, 60, 10);

    assert!(output.contains("Enter a keyword or phrase..."));
    assert!(!output.contains("Search Volume"));
}

#[test]
fn test_loading_without_results_shows_generating() {
    let mut app = test_app_with_delay(5_000);
    app.set_query("seo");
    app.submit();

    let output = render_pane_to_string(&mut app, 60, 10);

    assert!(output.contains("Generating keywords..."));
    assert!(!output.contains("Search Volume"));
}

fn test_app_with_delay(delay_ms: u64) -> App {
    let mut config = crate::config::Config::default();
    config.search.delay_ms = delay_ms;
    App::new(&config, crate::research::source_from_seed(Some(1)))
}

#[test]
fn test_cards_show_phrase_badge_and_volume() {
    let mut app = scripted_app();
    submit_and_wait(&mut app, "seo");

    let output = render_pane_to_string(&mut app, 100, 24);

    assert!(output.contains("Results (20) for \"seo\""));
    assert!(output.contains("seo tool"));
    assert!(output.contains(" Low "));
    assert!(output.contains("Search Volume: 1,234"));
    assert!(output.contains("seo guide"));
    assert!(output.contains(" Medium "));
    assert!(output.contains("Search Volume: 10,999"));
    assert!(output.contains(" High "));
    assert!(output.contains("Search Volume: 1,000"));
}

#[test]
fn test_wide_pane_uses_two_columns() {
    let mut app = scripted_app();
    submit_and_wait(&mut app, "seo");

    // 4 visible card rows at 2 columns = first 8 cards
    let output = render_pane_to_string(&mut app, 100, 18);

    assert!(output.contains("seo strategies"));
    assert!(!output.contains("seo solutions"));
}

#[test]
fn test_narrow_pane_uses_one_column() {
    let mut app = scripted_app();
    submit_and_wait(&mut app, "seo");

    // 4 visible card rows at 1 column = first 4 cards
    let output = render_pane_to_string(&mut app, 60, 18);

    assert!(output.contains("seo tricks"));
    assert!(!output.contains("seo hacks"));
}

#[test]
fn test_scroll_offset_skips_card_rows() {
    let mut app = scripted_app();
    submit_and_wait(&mut app, "seo");

    render_pane_to_string(&mut app, 60, 18);
    app.results_scroll.jump_to_bottom();
    let output = render_pane_to_string(&mut app, 60, 18);

    assert!(output.contains("seo FAQS"));
    assert!(!output.contains("seo tool "));
}

#[test]
fn test_scroll_bounds_track_rows() {
    let mut app = scripted_app();
    submit_and_wait(&mut app, "seo");

    render_pane_to_string(&mut app, 100, 18);

    // 10 rows of 2 cards, 4 visible
    assert_eq!(app.results_scroll.max_offset, 6);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("short", 10), "short");
    assert_eq!(truncate_to_width("exactly", 7), "exactly");
    assert_eq!(truncate_to_width("truncated phrase", 8), "truncat…");
    assert_eq!(truncate_to_width("anything", 0), "");
}

#[test]
fn test_truncate_counts_wide_chars() {
    // Each CJK char is two cells wide
    assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_truncate_fits_budget(text in "[a-zA-Z0-9 日本語]{0,40}", max in 0usize..30) {
        let out = truncate_to_width(&text, max);
        prop_assert!(out.width() <= max);
    }
}
