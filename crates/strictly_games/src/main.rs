//! Strictly Games - tic-tac-toe against a negamax engine.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use strictly_games::cli::{Cli, Command, MarkArg};
use strictly_games::players::{HumanPlayer, NegamaxPlayer};
use strictly_games::{GameConfig, GameRecord, Orchestrator, Overrides, session};
use strictly_negamax::{Negamax, SearchConfig};
use strictly_tictactoe::{Board, Player as Mark, Position, TicTacToe};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            first,
            depth,
            config,
            no_table,
            retain_table,
            record,
        } => {
            let overrides = Overrides {
                depth,
                first,
                no_table,
                retain_table,
            };
            run_play(config, overrides, record)
        }
        Command::SelfPlay {
            first,
            depth,
            record,
        } => run_self_play(first, depth, record),
        Command::BestMove {
            board,
            to_move,
            depth,
        } => run_best_move(&board, to_move, depth),
    }
}

/// Run an interactive game against the engine
#[instrument]
fn run_play(config: Option<PathBuf>, overrides: Overrides, record: Option<PathBuf>) -> Result<()> {
    let base = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = base.with_overrides(&overrides)?;
    info!(?config, "Starting interactive game");

    let human = HumanPlayer::new("Human", std::io::stdin().lock(), std::io::stdout());
    let mut game = session::human_vs_engine(&config, Box::new(human));
    let mut out = std::io::stdout();
    writeln!(
        out,
        "You are {}, the computer is {}.",
        session::HUMAN_MARK,
        session::ENGINE_MARK
    )?;
    session::run(&mut game, &mut out)?;

    if let Some(path) = record {
        write_record(&game, &path)?;
    }
    Ok(())
}

/// Let the engine play itself
#[instrument]
fn run_self_play(first: MarkArg, depth: u32, record: Option<PathBuf>) -> Result<()> {
    let search = SearchConfig::new(depth);
    let opener: Mark = first.into();
    let mut game = Orchestrator::new(
        TicTacToe::new(opener),
        Box::new(NegamaxPlayer::new(format!("Engine {opener}"), search)),
        Box::new(NegamaxPlayer::new(format!("Engine {}", opener.opponent()), search)),
    );

    let mut out = std::io::stdout();
    while !game.is_over() {
        let turn = game.step()?;
        writeln!(out, "{} plays {}\n{}\n", turn.player(), turn.mv(), game.state())?;
    }
    if let Some(outcome) = game.outcome() {
        writeln!(out, "{outcome}")?;
    }

    if let Some(path) = record {
        write_record(&game, &path)?;
    }
    Ok(())
}

/// Print the engine's choice for one position
#[instrument]
fn run_best_move(board: &str, to_move: MarkArg, depth: u32) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let mut state = TicTacToe::from_position(board, to_move.into());
    let mut engine = Negamax::new(SearchConfig::new(depth));
    let result = engine.choose_move(&mut state, depth)?;
    let mv: Position = *result.best_move();

    println!("{}", state.board().numbered());
    println!(
        "Best move: {} ({}), score {}, {} nodes",
        mv,
        mv.label(),
        result.score(),
        result.stats().nodes()
    );
    Ok(())
}

fn write_record(game: &Orchestrator<TicTacToe>, path: &Path) -> Result<()> {
    let record: GameRecord<Position> = game
        .record()
        .context("Game has not finished, nothing to record")?;
    save_json(&record, path)?;
    info!(path = %path.display(), "Game record written");
    Ok(())
}

fn save_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
