/// Popup rows as (key, description). An empty key marks a section header,
/// and an empty pair is a spacer.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit without output"),
    ("Ctrl+O", "Quit and print results as JSON"),
    ("Ctrl+Q", "Quit and print the query"),
    ("", ""),
    ("", "KEYWORD FIELD"),
    ("Enter", "Search (ignored while generating)"),
    ("Tab", "Focus results"),
    ("Ctrl+U", "Clear the field"),
    ("Esc", "Quit without output"),
    ("", ""),
    ("", "RESULTS"),
    ("j/k/↑/↓", "Scroll one row of cards"),
    ("PageDown/Up", "Scroll half a page"),
    ("g/Home", "Jump to top"),
    ("G/End", "Jump to bottom"),
    ("Tab/i/Esc", "Back to keyword field"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

pub const HELP_FOOTER: &str = "j/k: scroll | Esc/F1/?/q: close";
