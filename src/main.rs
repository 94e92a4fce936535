//! Wordle Terminal Client - guess the hidden 5-letter word in six tries
//!
//! Single-player terminal game. Target words, dictionary checks and
//! scoring come from a remote word service; when it is unreachable the
//! client falls back to a local word and local scoring.

mod api;
mod cli;
mod config;
mod game;

use anyhow::{anyhow, Result};
use api::{FallbackWordService, HttpWordService, OfflineWordService, WordService};
use clap::Parser;
use cli::display::Display;
use cli::input::{Action, InputHandler};
use config::{ClientConfig, LogConfig};
use game::evaluate::normalize_word;
use game::{Game, GameStatus, KeyOutcome, SubmitOutcome};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wordle-term")]
#[command(about = "Guess the hidden 5-letter word in six tries")]
struct Args {
    /// Word service base URL
    #[arg(long, env = "WORDLE_API_URL", default_value = config::DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Play without the word service (built-in word list)
    #[arg(long)]
    offline: bool,

    /// Target word used when the service cannot supply one
    #[arg(long, default_value = config::DEFAULT_FALLBACK_WORD, value_parser = parse_word)]
    fallback_word: String,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            fallback_word: self.fallback_word.clone(),
            offline: self.offline,
            ..ClientConfig::default()
        }
        .with_url(&self.api_url)
        .with_timeout(Duration::from_millis(self.timeout_ms))
    }

    fn log_config(&self) -> LogConfig {
        LogConfig {
            file: self.log_file.clone(),
            debug: self.debug,
        }
    }
}

fn parse_word(s: &str) -> Result<String, String> {
    normalize_word(s)
        .map(|letters| letters.iter().map(|&b| b as char).collect())
        .map_err(|e| e.to_string())
}

/// File logging; the terminal belongs to the game, so no file means no logs
fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = &config.file else {
        return Ok(None);
    };

    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file path has no file name: {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    Ok(Some(guard))
}

/// Pick the word service and wrap it with local fallbacks
fn build_service(config: &ClientConfig) -> Result<FallbackWordService<Box<dyn WordService>>> {
    let inner: Box<dyn WordService> = if config.offline {
        tracing::info!("Offline mode: using built-in word list");
        Box::new(OfflineWordService::new())
    } else {
        let http = HttpWordService::new(config.clone())?;
        match http.health() {
            Ok(true) => tracing::info!(url = %http.config().api_url, "Word service healthy"),
            Ok(false) => tracing::warn!(url = %http.config().api_url, "Word service reports unhealthy"),
            Err(e) => tracing::warn!(
                url = %http.config().api_url,
                unreachable = e.is_unreachable(),
                error = %e,
                "Word service health check failed; local fallbacks will be used"
            ),
        }
        Box::new(http)
    };

    Ok(FallbackWordService::new(inner, config.fallback_word.clone()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(&args.log_config())?;
    let config = args.client_config();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        offline = config.offline,
        "Starting wordle-term"
    );

    // Initialize display
    let display = Display::alternate()?;
    InputHandler::enable_raw_mode()?;
    display.show_loading()?;

    let service = build_service(&config)?;
    let mut game = Game::new(&service.word());
    let input = InputHandler::new();

    let mut games_won = 0u32;
    let mut games_played = 0u32;
    let mut dirty = true;

    // Event loop
    'game: loop {
        if game.expire_message() {
            dirty = true;
        }
        if dirty {
            display.render(&game)?;
            dirty = false;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };
        let Some(action) = InputHandler::action(&key, game.is_over()) else {
            continue;
        };

        match action {
            Action::Exit => break 'game,
            Action::ToggleHelp => game.toggle_instructions(),
            Action::PlayAgain => {
                display.show_loading()?;
                game.reset(&service.word());
            }
            Action::Game(game_key) => {
                if game.handle_key(game_key) == KeyOutcome::Submit {
                    if let SubmitOutcome::Scored { row, evaluation } = game.submit(&service) {
                        tracing::info!(row, ?evaluation, "Guess scored");
                    }
                    if game.is_over() {
                        games_played += 1;
                        if game.status() == GameStatus::Won {
                            games_won += 1;
                        }
                    }
                }
            }
        }
        dirty = true;
    }

    // Cleanup
    InputHandler::disable_raw_mode()?;
    display.shutdown()?;

    tracing::info!(games_played, games_won, "Session finished");
    println!("Games won: {}/{}", games_won, games_played);
    if !game.is_over() && game.attempts() > 0 {
        println!("The word was {}.", game.target());
    }
    println!("Thanks for playing!");

    Ok(())
}
