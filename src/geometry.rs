//! Board geometry: linear points, `(row, col)` locations and adjacency.
//!
//! A point is a linear index `row * width + col`. Row 0 is the bottom row
//! when the board is rendered, so "up" means `point + width`.

use crate::constants::{MAX_SIDE, MIN_SIDE};
use crate::error::GameError;

/// A point on the board, represented as a linear index.
pub type Point = usize;

/// Width and height of a board, plus the conversions that depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let side_ok = |s: usize| (MIN_SIDE..=MAX_SIDE).contains(&s);
        if !side_ok(width) || !side_ok(height) {
            return Err(GameError::InvalidBoardSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of points on the board.
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point < self.area()
    }

    pub fn move_to_location(&self, point: Point) -> Result<(usize, usize), GameError> {
        if !self.contains(point) {
            return Err(GameError::InvalidCoordinate(point.to_string()));
        }
        Ok((point / self.width, point % self.width))
    }

    /// Convert a `[row, col]` location into a point.
    ///
    /// The location must have exactly two components and lie on the board.
    pub fn location_to_move(&self, location: &[usize]) -> Result<Point, GameError> {
        let &[row, col] = location else {
            return Err(GameError::InvalidCoordinate(format!("{location:?}")));
        };
        if row >= self.height || col >= self.width {
            return Err(GameError::InvalidCoordinate(format!("{location:?}")));
        }
        Ok(row * self.width + col)
    }

    /// Parse a `"row,col"` string, as typed by a human player.
    pub fn parse_location(&self, s: &str) -> Result<Point, GameError> {
        let parts: Result<Vec<usize>, _> = s.split(',').map(|p| p.trim().parse()).collect();
        match parts {
            Ok(location) => self.location_to_move(&location),
            Err(_) => Err(GameError::InvalidCoordinate(s.trim().to_string())),
        }
    }

    /// The 4 orthogonal neighbours in the order up, down, left, right.
    /// Off-board neighbours are `None`.
    #[inline]
    pub fn neighbors(&self, point: Point) -> [Option<Point>; 4] {
        let w = self.width;
        let col = point % w;
        let up = (point + w < self.area()).then(|| point + w);
        let down = (point >= w).then(|| point - w);
        let left = (col != 0).then(|| point - 1);
        let right = (col != w - 1).then(|| point + 1);
        [up, down, left, right]
    }
}
