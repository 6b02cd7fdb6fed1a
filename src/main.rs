use std::io;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

use keyscout::app::{App, OutputMode};
use keyscout::config::{self, Config, ConfigResult};
use keyscout::headless::run_headless;
use keyscout::logging;
use keyscout::research::source_from_seed;

/// Keyword research mock with a terminal UI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generate one batch for QUERY, print it as JSON and exit
    #[arg(short, long, value_name = "QUERY")]
    query: Option<String>,

    /// Seed for reproducible search volumes and competition levels
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before results appear, in milliseconds
    #[arg(long, value_name = "MS", conflicts_with = "no_delay")]
    delay_ms: Option<u64>,

    /// Show results immediately
    #[arg(long)]
    no_delay: bool,
}

impl Args {
    /// Command-line flags override config file values
    fn apply_to(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.search.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.search.delay_ms = delay_ms;
        }
        if self.no_delay {
            config.search.delay_ms = 0;
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    let ConfigResult {
        config: mut app_config,
        warning,
    } = config::load_config();
    args.apply_to(&mut app_config);
    log::debug!("Starting with {:?}", app_config);

    if let Some(query) = &args.query {
        let batch = run_headless(query, &app_config)?;
        println!("{}", batch.to_json()?);
        return Ok(());
    }

    let mut app = App::new(&app_config, source_from_seed(app_config.search.seed));
    app.notice = warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableBracketedPaste)
        .map_err(color_eyre::Report::from)
        .and_then(|_| run(terminal, &mut app));

    // Restore terminal before printing anything
    let _ = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    result?;

    match app.output_mode() {
        Some(OutputMode::Results) => {
            if let Some(batch) = app.current_batch() {
                println!("{}", batch.to_json()?);
            }
        }
        Some(OutputMode::Query) => println!("{}", app.query()),
        None => {}
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_search();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
