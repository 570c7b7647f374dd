//! Kai-Go command line.
//!
//! ## Usage
//!
//! - `kai-go` - Random agent against the tree search, board shown
//! - `kai-go play` - Play against the tree search from the terminal
//! - `kai-go selfplay --games 10` - Generate self-play games
//!
//! Log verbosity follows `RUST_LOG` (default `kai_go=info`).

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use kai_go::agent::{HumanAgent, RandomAgent};
use kai_go::board::{Board, Color};
use kai_go::constants::{C_PUCT, N, N_PLAYOUT, SELFPLAY_TEMP};
use kai_go::game::Game;
use kai_go::mcts::{MctsAgent, MctsConfig};

/// Kai-Go: no-capture Go engine for self-play
#[derive(Parser)]
#[command(name = "kai-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    opts: Opts,
}

#[derive(Args, Clone)]
struct Opts {
    /// Board width
    #[arg(long, default_value_t = N, global = true)]
    width: usize,
    /// Board height
    #[arg(long, default_value_t = N, global = true)]
    height: usize,
    /// Tree search playouts per move
    #[arg(long, default_value_t = N_PLAYOUT, global = true)]
    playouts: usize,
    /// Exploration constant
    #[arg(long, default_value_t = C_PUCT, global = true)]
    c_puct: f64,
    /// RNG seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a random agent play the tree search
    Demo,
    /// Play against the tree search (enter moves as row,col)
    Play {
        /// 0 to move first, 1 to let the engine start
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Run self-play games and report statistics
    #[command(name = "selfplay")]
    SelfPlay {
        #[arg(long, default_value_t = 1)]
        games: usize,
        /// Exploration temperature for move sampling
        #[arg(long, default_value_t = SELFPLAY_TEMP)]
        temperature: f64,
        /// Print the board after every move
        #[arg(long)]
        show: bool,
    },
}

impl Opts {
    fn board(&self) -> Result<Board> {
        Board::new(self.width, self.height).context("creating board")
    }

    fn mcts(&self) -> MctsAgent {
        MctsAgent::new(MctsConfig {
            n_playout: self.playouts,
            c_puct: self.c_puct,
            seed: self.seed,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kai_go=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = cli.opts;

    match cli.command {
        Some(Commands::Play { start }) => run_play(&opts, start),
        Some(Commands::SelfPlay {
            games,
            temperature,
            show,
        }) => run_self_play(&opts, games, temperature, show),
        Some(Commands::Demo) | None => run_demo(&opts),
    }
}

fn run_demo(opts: &Opts) -> Result<()> {
    let mut game = Game::new(opts.board()?);
    let mut random = match opts.seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };
    let mut mcts = opts.mcts();
    game.start_play(&mut random, &mut mcts, 0, true)?;
    Ok(())
}

fn run_play(opts: &Opts, start: usize) -> Result<()> {
    let mut game = Game::new(opts.board()?);
    let stdin = io::stdin();
    let mut human = HumanAgent::new(stdin.lock(), io::stdout());
    let mut mcts = opts.mcts();
    game.start_play(&mut human, &mut mcts, start, true)?;
    Ok(())
}

fn run_self_play(opts: &Opts, games: usize, temperature: f64, show: bool) -> Result<()> {
    let mut game = Game::new(opts.board()?);
    let mut agent = opts.mcts();
    let mut wins = [0usize; 2];
    let mut samples = 0;
    let mut total_moves = 0;

    for i in 0..games {
        let record = game
            .start_self_play(&mut agent, show, temperature)
            .with_context(|| format!("self-play game {}", i + 1))?;
        wins[record.winner.index()] += 1;
        samples += record.samples.len();
        total_moves += record.moves;
        info!(game = i + 1, winner = %record.winner, moves = record.moves, "finished");
    }

    let avg = if games > 0 { total_moves as f64 / games as f64 } else { 0.0 };
    info!(
        games,
        black_wins = wins[Color::Black.index()],
        white_wins = wins[Color::White.index()],
        samples,
        avg_moves = avg,
        "self-play summary"
    );
    Ok(())
}
