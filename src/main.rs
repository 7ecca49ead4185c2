use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{AiEngine, Difficulty};
use connect_four::arena::Arena;
use connect_four::config::AppConfig;

/// Play Connect Four AI-vs-AI matches and report the results.
#[derive(Parser)]
#[command(name = "connect-four", about = "Pit Connect Four AI difficulties against each other")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Difficulty for player one: easy, medium or hard
    #[arg(long)]
    first: Option<Difficulty>,

    /// Difficulty for player two: easy, medium or hard
    #[arg(long)]
    second: Option<Difficulty>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed the AI for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Print every final board
    #[arg(long)]
    show_board: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(first) = cli.first {
        config.arena.first = first;
    }
    if let Some(second) = cli.second {
        config.arena.second = second;
    }
    if let Some(depth) = cli.depth {
        config.ai.depth = depth;
    }
    if cli.seed.is_some() {
        config.ai.seed = cli.seed;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    config.validate().context("invalid settings")?;

    let engine = AiEngine::from_config(&config.ai);
    let mut arena = Arena::new(config.board.rows, config.board.columns, engine)
        .context("creating arena")?;

    let show_board = cli.show_board;
    let report = arena.run(&config.arena, |index, record| {
        if show_board {
            let result = match record.winner {
                Some(player) => format!("{} wins", player.name()),
                None => "draw".to_string(),
            };
            println!("Game {index}: {result} in {} moves", record.game_length());
            println!("{}\n", record.final_board);
        }
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("-------------------------------------------");
        println!(
            "{} (player 1) vs {} (player 2), {} games",
            report.first, report.second, report.games
        );
        println!(
            "Player 1 wins: {} | Player 2 wins: {} | Draws: {}",
            report.first_wins, report.second_wins, report.draws
        );
        println!(
            "Player 1 win rate: {:.1}% | avg length: {:.1}",
            report.first_win_rate() * 100.0,
            report.average_game_length()
        );
    }

    Ok(())
}
