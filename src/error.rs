//! Errors raised by the rules engine.

use std::fmt;

use crate::geometry::Point;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// Point already holds a stone
    Occupied,
    /// Point is empty but not in the mover's legal list
    NotLegal,
    /// Point is outside the board
    OffBoard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    IllegalMove { point: Point, reason: IllegalReason },
    InvalidCoordinate(String),
    InvalidStartPlayer(usize),
    InvalidBoardSize { width: usize, height: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { point, reason } => {
                let why = match reason {
                    IllegalReason::Occupied => "point not empty",
                    IllegalReason::NotLegal => "point not playable for this player",
                    IllegalReason::OffBoard => "point off board",
                };
                write!(f, "illegal move {point}: {why}")
            }
            GameError::InvalidCoordinate(loc) => write!(f, "invalid coordinate: {loc}"),
            GameError::InvalidStartPlayer(p) => {
                write!(f, "start player should be either 0 (player1 first) or 1 (player2 first), got {p}")
            }
            GameError::InvalidBoardSize { width, height } => {
                write!(f, "unsupported board size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_illegal_move() {
        let e = GameError::IllegalMove {
            point: 12,
            reason: IllegalReason::Occupied,
        };
        assert_eq!(e.to_string(), "illegal move 12: point not empty");
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let e: anyhow::Error = GameError::InvalidStartPlayer(2).into();
        assert!(e.to_string().contains("got 2"));
        assert_eq!(
            e.downcast_ref::<GameError>(),
            Some(&GameError::InvalidStartPlayer(2))
        );
    }
}
