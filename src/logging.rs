//! Debug-build file logging
//!
//! The TUI owns the terminal, so log records go to
//! `<cache dir>/keyscout/keyscout-debug.log`. Release builds log nothing.
//! `RUST_LOG` overrides the default `debug` filter.

#[cfg(debug_assertions)]
use std::path::PathBuf;

#[cfg(debug_assertions)]
const LOG_FILE: &str = "keyscout-debug.log";

#[cfg(debug_assertions)]
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("keyscout").join(LOG_FILE))
}

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
