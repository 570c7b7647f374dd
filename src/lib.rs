//! Kai-Go: rules engine for a no-capture Go variant used in self-play.
//!
//! Stones connect into groups tracked by a union-find arena; each group's
//! liberties are maintained incrementally, and both players' legal move
//! lists are refreshed after every placement. Nothing is ever captured:
//! instead, no one may play next to a group that is down to one liberty.
//! A player with no legal move loses.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and search parameters
//! - [`geometry`] - Points, `(row, col)` locations, adjacency
//! - [`disjoint`] - Union-find arena over board points
//! - [`group`] - Group records and their liberties
//! - [`legality`] - Per-color legal move lists
//! - [`board`] - Board state and move application
//! - [`encoder`] - Observation planes for an evaluator
//! - [`agent`] - Agent interface, random and human agents
//! - [`mcts`] - Tree search agent with random rollouts
//! - [`playout`] - Random game simulation
//! - [`game`] - Match and self-play driver
//!
//! ## Example
//!
//! ```
//! use kai_go::board::{Board, Color};
//!
//! let mut board = Board::new(5, 5).unwrap();
//! board.apply(12).unwrap();
//! board.apply(7).unwrap();
//!
//! let (_, group) = board.group_of(12).unwrap();
//! assert_eq!(group.liberty_count(), 3);
//! assert_eq!(board.current_player(), Color::Black);
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod disjoint;
pub mod encoder;
pub mod error;
pub mod game;
pub mod geometry;
pub mod group;
pub mod legality;
pub mod mcts;
pub mod playout;
