//! Constants for board dimensions and search parameters.
//!
//! # Board Size Configuration
//!
//! Boards are sized at runtime, but the default side length used by
//! [`Board::default`](crate::board::Board) and the CLI is controlled by
//! Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default side length of the board.
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Smallest accepted side length. A 1-wide board has points with no neighbours.
pub const MIN_SIDE: usize = 2;

/// Largest accepted side length.
pub const MAX_SIDE: usize = 25;

// =============================================================================
// Observation Encoding
// =============================================================================

/// Number of feature planes produced by the encoder.
pub const N_PLANES: usize = 4;

// =============================================================================
// MCTS Parameters
// =============================================================================

/// Default number of playouts per move.
pub const N_PLAYOUT: usize = 400;

/// Exploration constant of the UCT formula.
pub const C_PUCT: f64 = 5.0;

/// Default exploration temperature for self-play.
pub const SELFPLAY_TEMP: f64 = 1.0;

/// Temperatures at or below this pick the most visited move outright.
pub const GREEDY_TEMP: f64 = 1e-3;
