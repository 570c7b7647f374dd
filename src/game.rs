//! Match and self-play driver.
//!
//! Composes a [`Board`] with two agents (or one agent playing both sides),
//! runs the turn loop and reports the outcome. Self-play additionally keeps
//! one training sample per move.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::agent::{Agent, dense_probs};
use crate::board::{Board, Color, GameStatus};
use crate::encoder::{Observation, encode};

/// One training example produced by self-play.
#[derive(Debug, Clone)]
pub struct SelfPlaySample {
    pub state: Observation,
    /// Move probabilities, one entry per board point
    pub probs: Vec<f32>,
    /// +1 if the player to move at this state went on to win, -1 otherwise
    pub z: f32,
}

#[derive(Debug, Clone)]
pub struct SelfPlayRecord {
    pub winner: Color,
    pub moves: usize,
    pub samples: Vec<SelfPlaySample>,
}

pub struct Game {
    pub board: Board,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Play `p1` (Black) against `p2` (White). Returns the winner.
    ///
    /// `start_player` is 0 for `p1` first, 1 for `p2` first.
    pub fn start_play(
        &mut self,
        p1: &mut dyn Agent,
        p2: &mut dyn Agent,
        start_player: usize,
        shown: bool,
    ) -> Result<Color> {
        self.board.init_board(start_player)?;
        p1.assign_identity(Color::Black);
        p2.assign_identity(Color::White);
        if shown {
            print_header(p1.name(), p2.name());
            println!("{}", self.board);
        }

        loop {
            let player = self.board.current_player();
            let agent: &mut dyn Agent = match player {
                Color::Black => &mut *p1,
                Color::White => &mut *p2,
            };
            let mv = agent
                .select_move(&self.board)
                .with_context(|| format!("{} ({player}) failed to choose a move", agent.name()))?;
            self.board.apply(mv)?;
            debug!(%player, mv, moves = self.board.move_count(), "move played");
            if shown {
                println!("{}", self.board);
            }

            if let GameStatus::Ended { winner } = self.board.status() {
                let name = match winner {
                    Color::Black => p1.name(),
                    Color::White => p2.name(),
                };
                info!(%winner, agent = name, moves = self.board.move_count(), "game end");
                if shown {
                    println!("Game end. Winner is {name} ({winner})");
                }
                return Ok(winner);
            }
        }
    }

    /// Let `agent` play both sides, recording `(state, probs, z)` per move.
    pub fn start_self_play(&mut self, agent: &mut dyn Agent, shown: bool, temperature: f64) -> Result<SelfPlayRecord> {
        self.board.init_board(0)?;
        let area = self.board.area();
        let mut states = Vec::new();
        let mut probs = Vec::new();
        let mut movers = Vec::new();

        loop {
            let player = self.board.current_player();
            agent.assign_identity(player);
            let (mv, move_probs) = agent
                .select_move_with_probs(&self.board, temperature)
                .with_context(|| format!("{} failed to choose a move", agent.name()))?;

            states.push(encode(&self.board));
            probs.push(dense_probs(&move_probs, area));
            movers.push(player);

            self.board.apply(mv)?;
            debug!(%player, mv, moves = self.board.move_count(), "self-play move");
            if shown {
                println!("{}", self.board);
            }

            if let GameStatus::Ended { winner } = self.board.status() {
                agent.reset_search_state();
                let samples = states
                    .into_iter()
                    .zip(probs)
                    .zip(movers)
                    .map(|((state, probs), mover)| SelfPlaySample {
                        state,
                        probs,
                        z: if mover == winner { 1.0 } else { -1.0 },
                    })
                    .collect();
                let moves = self.board.move_count();
                info!(%winner, moves, "self-play game end");
                if shown {
                    println!("Game end. Winner is {winner}");
                }
                return Ok(SelfPlayRecord { winner, moves, samples });
            }
        }
    }
}

fn print_header(p1: &str, p2: &str) {
    println!("Player {p1} with {}", Color::Black.symbol());
    println!("Player {p2} with {}", Color::White.symbol());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RandomAgent;
    use crate::error::GameError;

    #[test]
    fn test_start_play_random_vs_random() {
        let mut game = Game::new(Board::new(5, 5).unwrap());
        let mut a = RandomAgent::with_seed(1);
        let mut b = RandomAgent::with_seed(2);
        let winner = game.start_play(&mut a, &mut b, 0, false).unwrap();
        let last = game.board.placements().last().unwrap();
        assert_eq!(last.1, winner);
        assert!(game.board.current_legal_moves().is_empty());
    }

    #[test]
    fn test_start_play_second_player_first() {
        let mut game = Game::new(Board::new(4, 4).unwrap());
        let mut a = RandomAgent::with_seed(5);
        let mut b = RandomAgent::with_seed(6);
        game.start_play(&mut a, &mut b, 1, false).unwrap();
        assert_eq!(game.board.placements()[0].1, Color::White);
    }

    #[test]
    fn test_invalid_start_player() {
        let mut game = Game::new(Board::new(4, 4).unwrap());
        let mut a = RandomAgent::with_seed(5);
        let mut b = RandomAgent::with_seed(6);
        let err = game.start_play(&mut a, &mut b, 2, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::InvalidStartPlayer(2))
        );
    }

    #[test]
    fn test_self_play_labels() {
        let mut game = Game::new(Board::new(4, 4).unwrap());
        let mut agent = RandomAgent::with_seed(11);
        let record = game.start_self_play(&mut agent, false, 1.0).unwrap();
        assert_eq!(record.samples.len(), record.moves);
        for (i, sample) in record.samples.iter().enumerate() {
            let mover = if i % 2 == 0 { Color::Black } else { Color::White };
            let expected = if mover == record.winner { 1.0 } else { -1.0 };
            assert_eq!(sample.z, expected);
            assert_eq!(sample.probs.len(), 16);
            assert!((sample.probs.iter().sum::<f32>() - 1.0).abs() < 1e-4);
        }
    }
}
