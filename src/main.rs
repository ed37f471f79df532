use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::game::{GameController, PlayerType};
use connect_four::ui::{headless, terminal, App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Who plays red (moves first)
    #[arg(long, value_enum)]
    player1: Option<PlayerType>,

    /// Who plays black
    #[arg(long, value_enum)]
    player2: Option<PlayerType>,

    /// Seed for computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Play computer against computer without the UI and print the result
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, found) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(player) = cli.player1 {
        config.players.one = player;
    }
    if let Some(player) = cli.player2 {
        config.players.two = player;
    }
    if cli.seed.is_some() {
        config.computer.seed = cli.seed;
    }

    init_logging(&config.logging, cli.headless)?;
    if !found {
        log::warn!("config file '{}' not found, using defaults", cli.config.display());
    }

    let mut controller = GameController::from_types(config.players.types(), config.computer.seed);

    if cli.headless {
        if config.players.types().contains(&PlayerType::Human) {
            bail!("headless mode needs both players to be 'computer'");
        }
        headless::play(&mut controller, &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut app = App::new(controller, Duration::from_millis(config.display.tick_ms));
    terminal::run(&mut app).context("running terminal UI")
}

/// Send logs to the configured file. The terminal UI owns the screen, so
/// without a file only headless runs log (to stderr).
fn init_logging(config: &LoggingConfig, headless: bool) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);

    match &config.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if headless => {}
        None => return Ok(()),
    }

    builder.try_init().context("initializing logger")
}
