//! Observation planes for an external evaluator.
//!
//! Four `height x width` planes, seen from the player to move:
//!
//! | plane | content                                               |
//! |-------|-------------------------------------------------------|
//! | 0     | stones of the player to move                          |
//! | 1     | stones of the opponent                                |
//! | 2     | the last move (all zero before the first move)        |
//! | 3     | all ones when an even number of stones has been played |
//!
//! Rows are stored top-down, i.e. row order is reversed relative to the
//! board's own row numbering. Evaluators must be trained with the same
//! orientation.

use crate::board::Board;
use crate::constants::N_PLANES;

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub width: usize,
    pub height: usize,
    /// Plane-major, then row, then column.
    pub data: Vec<f32>,
}

impl Observation {
    #[inline]
    pub fn get(&self, plane: usize, row: usize, col: usize) -> f32 {
        self.data[(plane * self.height + row) * self.width + col]
    }

    /// One plane as a flat `height * width` slice.
    pub fn plane(&self, plane: usize) -> &[f32] {
        let len = self.width * self.height;
        &self.data[plane * len..(plane + 1) * len]
    }
}

/// Encode `board` from the perspective of the player to move.
pub fn encode(board: &Board) -> Observation {
    let (w, h) = (board.width(), board.height());
    let mut data = vec![0.0f32; N_PLANES * w * h];
    // Board row r lands on output row h - 1 - r
    let slot = |plane: usize, point: usize| {
        let (row, col) = (point / w, point % w);
        (plane * h + (h - 1 - row)) * w + col
    };

    let me = board.current_player();
    for &(pt, color) in board.placements() {
        let plane = if color == me { 0 } else { 1 };
        data[slot(plane, pt)] = 1.0;
    }
    if let Some(last) = board.last_move() {
        data[slot(2, last)] = 1.0;
    }
    if board.move_count() % 2 == 0 {
        data[3 * w * h..].fill(1.0);
    }

    Observation {
        width: w,
        height: h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new(3, 3).unwrap();
        let obs = encode(&board);
        assert_eq!(obs.data.len(), 4 * 9);
        assert!(obs.plane(0).iter().all(|&v| v == 0.0));
        assert!(obs.plane(1).iter().all(|&v| v == 0.0));
        assert!(obs.plane(2).iter().all(|&v| v == 0.0));
        assert!(obs.plane(3).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_perspective_and_flip() {
        let mut board = Board::new(4, 3).unwrap();
        board.apply(1).unwrap(); // Black at row 0, col 1
        let obs = encode(&board);
        // White to move: Black's stone is on the opponent plane,
        // bottom board row becomes the last output row.
        assert_eq!(obs.get(1, 2, 1), 1.0);
        assert_eq!(obs.get(0, 2, 1), 0.0);
        assert_eq!(obs.get(2, 2, 1), 1.0);
        assert_eq!(obs.plane(2).iter().sum::<f32>(), 1.0);
        assert!(obs.plane(3).iter().all(|&v| v == 0.0));

        board.apply(11).unwrap(); // White at row 2, col 3
        let obs = encode(&board);
        assert_eq!(obs.get(0, 2, 1), 1.0);
        assert_eq!(obs.get(1, 0, 3), 1.0);
        assert_eq!(obs.get(2, 0, 3), 1.0);
        assert_eq!(obs.get(2, 2, 1), 0.0);
        assert!(obs.plane(3).iter().all(|&v| v == 1.0));
    }
}
