//! Strictly NxN - command-line driver
//!
//! Replays games, asks the engine for moves and prints the results.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, EngineArgs, GameArgs};
use strictly_nxn::{Engine, GameState, Model, Move, SearchConfig};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Best {
            game,
            moves,
            engine,
            json,
        } => run_best(game, moves, engine, json),
        Command::Play { game, engine } => run_play(game, engine),
        Command::Lines { size } => run_lines(size),
    }
}

/// Builds the engine from the config file, then applies flag overrides.
#[instrument]
fn build_engine(args: EngineArgs) -> Result<Engine> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if args.pruning {
        config = config.with_pruning(true);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }

    let engine = Engine::new(config);
    debug!(%engine, "Engine ready");
    Ok(engine)
}

/// Replay moves and print the best reply
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_best(game: GameArgs, moves: Vec<Move>, engine: EngineArgs, json: bool) -> Result<()> {
    game.check_moves(&moves)?;
    let engine = build_engine(engine)?;
    let state = GameState::replay(game.first, game.size, &moves).context("replaying moves")?;

    if engine.game_over(&state) {
        println!("{}\n\n{}", state, engine.game_outcome(&state));
        return Ok(());
    }

    let report = engine.search(&state)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", state);
        if let Some(mv) = report.best_move {
            println!(
                "{} plays {} (score {}, {} nodes)",
                state.turn(),
                mv,
                report.score,
                report.nodes
            );
        }
    }
    Ok(())
}

/// Let the engine play itself
#[instrument]
fn run_play(game: GameArgs, engine: EngineArgs) -> Result<()> {
    let engine = build_engine(engine)?;
    info!(%engine, size = game.size, first = %game.first, "Starting self-play");

    let mut state = engine.game_start(game.first, game.size);
    while !engine.game_over(&state) {
        let mv = engine.find_best_move(&state)?;
        println!("{} plays {}", state.turn(), mv);
        state = engine.apply_move(&state, mv)?;
        println!("{}\n", state);
    }

    println!("{}", engine.game_outcome(&state));
    Ok(())
}

/// Print the lines of a board
#[instrument]
fn run_lines(size: usize) -> Result<()> {
    for line in Engine::default().lines(size) {
        println!("{}", line);
    }
    Ok(())
}
