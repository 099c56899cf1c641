//! Gobot: command-line driver for the Go rules engine.
//!
//! ## Usage
//!
//! - `gobot` - Show a demo
//! - `gobot demo` - Play a short scripted capture sequence
//! - `gobot selfplay` - Let two random players play each other
//! - `gobot selfplay --human black` - Play black yourself against the random player
//!
//! Set `RUST_LOG=debug` to see commits and captures.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gobot_core::board::{Board, Color};
use gobot_core::constants::DEFAULT_SIZE;
use gobot_core::game::Game;
use gobot_core::player::{HumanPlayer, Player, RandomPlayer};
use gobot_core::rules::{Move, Rules, SuicideCheck};

/// Gobot: a Go rules engine for small boards
#[derive(Parser)]
#[command(name = "gobot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scripted capture on an empty board
    Demo,
    /// Play a game between two random players
    Selfplay(SelfplayArgs),
}

#[derive(Args)]
struct SelfplayArgs {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Seed for the players; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many turns (default: 3 times the board area)
    #[arg(long)]
    max_moves: Option<usize>,
    /// Resolve captures before testing for suicide (standard Go)
    #[arg(long)]
    suicide_after_capture: bool,
    /// Take this side yourself, entering moves on stdin
    #[arg(long, value_enum)]
    human: Option<Side>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay(args)) => run_selfplay(&args),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("Gobot: Go rules engine\n");

    let mut board = Board::new(DEFAULT_SIZE);
    board.perform_move(Move::Place(2, 2), Color::Black)?;
    if let Err(e) = board.perform_move(Move::Place(2, 2), Color::Black) {
        println!("Replaying (2, 2): {e}");
    }

    for (row, col) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
        let outcome = board
            .perform_move(Move::Place(row, col), Color::White)
            .with_context(|| format!("white at ({row}, {col})"))?;
        board.perform_move(Move::Pass, Color::Black)?;
        if !outcome.captured.is_empty() {
            println!("White at ({row}, {col}) captured {:?}", outcome.captured);
        }
    }
    println!("{board}");
    Ok(())
}

fn run_selfplay(args: &SelfplayArgs) -> Result<()> {
    if args.size == 0 {
        bail!("board size must be positive");
    }
    let rules = Rules {
        suicide: if args.suicide_after_capture {
            SuicideCheck::AfterCapture
        } else {
            SuicideCheck::BeforeCapture
        },
    };
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    let human = args.human.map(Color::from);
    let make = |color: Color, seed: u64| -> Box<dyn Player> {
        if human == Some(color) {
            Box::new(HumanPlayer::stdio(color).with_rules(rules))
        } else {
            Box::new(RandomPlayer::seeded(color, seed).with_rules(rules))
        }
    };
    let black = make(Color::Black, seed);
    let white = make(Color::White, seed.wrapping_add(1));

    let mut game = Game::new(Board::new(args.size), black, white).with_rules(rules);
    let summary = game.play(args.max_moves);

    println!("seed {seed}: {} moves, stopped by {:?}", summary.moves, summary.stopped);
    println!("{}", summary.final_board);
    println!(
        "black stones: {}, white stones: {}",
        summary.final_board.count(Color::Black),
        summary.final_board.count(Color::White)
    );
    Ok(())
}
