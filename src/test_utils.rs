#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::research::{BoxedSource, source_from_seed};
    use ratatui::Frame;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_SEED: u64 = 42;

    /// App with no synthesis delay and a fixed seed
    pub fn test_app() -> App {
        test_app_with_source(source_from_seed(Some(TEST_SEED)))
    }

    pub fn test_app_with_source(source: BoxedSource) -> App {
        let mut config = Config::default();
        config.search.delay_ms = 0;
        App::new(&config, source)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Wait for the in-flight search to finish by polling
    ///
    /// Returns true if the search completed, false on timeout.
    pub fn wait_for_search_completion(app: &mut App, timeout_ms: u64) -> bool {
        let start = std::time::Instant::now();
        let timeout = std::time::Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.poll_search();
            if !app.search.is_loading() {
                return true;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        false
    }

    /// Set the query, submit it and wait for the batch
    pub fn submit_and_wait(app: &mut App, query: &str) {
        app.set_query(query);
        app.submit();

        assert!(
            wait_for_search_completion(app, 2000),
            "Search did not complete within timeout"
        );
    }

    /// Draw with a closure on a TestBackend and return the buffer as text
    pub fn render_with<F>(width: u16, height: u16, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().to_string()
    }

    /// Draw with a closure on a TestBackend and return the styled buffer
    pub fn render_buffer<F>(width: u16, height: u16, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Position of the first cell where `text` starts on a single row
    pub fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        let len = text.chars().count() as u16;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right().saturating_sub(len.saturating_sub(1)) {
                let matches = text
                    .chars()
                    .enumerate()
                    .all(|(i, ch)| buffer[(x + i as u16, y)].symbol() == ch.to_string());
                if matches {
                    return Some((x, y));
                }
            }
        }
        None
    }

    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        render_with(width, height, |f| app.render(f))
    }
}
