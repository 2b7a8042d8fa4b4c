use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use chess_cli::{Session, SessionConfig};
use chess_engine::Position;
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play a two-player game of chess in the terminal")]
struct Cli {
    /// Start from this position instead of the standard setup
    #[arg(long)]
    fen: Option<String>,
    /// Configuration file (defaults to ./chess.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Hide rank and file labels
    #[arg(long)]
    no_labels: bool,
    /// Draw the board on a checkered background
    #[arg(long)]
    color: bool,
    /// Do not announce when the side to move is in check
    #[arg(long)]
    no_check_notice: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = SessionConfig::load(cli.config.as_deref())?;
    if cli.no_labels {
        config.labels = false;
    }
    if cli.color {
        config.color = true;
    }
    if cli.no_check_notice {
        config.announce_check = false;
    }

    let level = match cli.verbose {
        0 => config.log_level()?.unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let position = match &cli.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::startpos(),
    };

    let mut session = Session::new(position, config);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
