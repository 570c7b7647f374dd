//! Random playouts (game simulation to the end).
//!
//! Every placement fills a point, so a playout ends within `area` moves and
//! always has a winner.

use crate::board::{Board, Color, GameStatus};
use crate::error::GameError;

/// Play uniformly random legal moves until the game ends. Returns the winner.
pub fn random_playout(board: &mut Board, rng: &mut fastrand::Rng) -> Result<Color, GameError> {
    loop {
        if let GameStatus::Ended { winner } = board.status() {
            return Ok(winner);
        }
        let legal = board.current_legal_moves();
        let pt = legal[rng.usize(..legal.len())];
        board.apply(pt)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playout_reaches_end() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..20 {
            let mut board = Board::new(5, 5).unwrap();
            let winner = random_playout(&mut board, &mut rng).unwrap();
            assert!(board.move_count() > 0);
            assert!(board.current_legal_moves().is_empty());
            assert_eq!(board.placements().last().unwrap().1, winner);
        }
    }

    #[test]
    fn test_playout_on_finished_board_is_noop() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut board = Board::new(2, 2).unwrap();
        let winner = random_playout(&mut board, &mut rng).unwrap();
        let n = board.move_count();
        assert_eq!(random_playout(&mut board, &mut rng).unwrap(), winner);
        assert_eq!(board.move_count(), n);
    }
}
