//! Board state and move application.
//!
//! The board owns the disjoint-set arena, the group registry and the two
//! legal move lists. Placing a stone updates all of them incrementally:
//!
//! 1. the new stone becomes a one-stone group whose liberties are its empty
//!    neighbours;
//! 2. adjacent enemy groups lose the placed point as a liberty;
//! 3. adjacent friendly groups are re-rooted under the new stone and their
//!    liberties merged in;
//! 4. both players' legal lists are refreshed.
//!
//! Stones are never captured. A group can reach zero liberties, but once a
//! group is down to one liberty nobody may play next to it.

use std::collections::BTreeSet;
use std::fmt;

use crate::constants::N;
use crate::disjoint::DisjointSet;
use crate::error::{GameError, IllegalReason};
use crate::geometry::{Geometry, Point};
use crate::group::{Group, GroupRegistry};
use crate::legality::LegalMoves;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Player index: 0 for Black, 1 for White.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, GameError> {
        match index {
            0 => Ok(Color::Black),
            1 => Ok(Color::White),
            other => Err(GameError::InvalidStartPlayer(other)),
        }
    }

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended { winner: Color },
}

/// A game in progress.
///
/// Cloning deep-copies every structure, which is how tree search explores
/// hypothetical continuations.
#[derive(Clone, Debug)]
pub struct Board {
    geo: Geometry,
    arena: DisjointSet,
    groups: GroupRegistry,
    legal: LegalMoves,
    /// Stones in move order
    placements: Vec<(Point, Color)>,
    current_player: Color,
    last_move: Option<Point>,
}

impl Default for Board {
    fn default() -> Self {
        let geo = Geometry { width: N, height: N };
        Self::fresh(geo, Color::Black)
    }
}

impl Board {
    /// An empty board with Black to move.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Self::with_start(width, height, 0)
    }

    /// An empty board where `start_player` (0 or 1) moves first.
    pub fn with_start(width: usize, height: usize, start_player: usize) -> Result<Self, GameError> {
        let geo = Geometry::new(width, height)?;
        let first = Color::from_index(start_player)?;
        Ok(Self::fresh(geo, first))
    }

    fn fresh(geo: Geometry, first: Color) -> Self {
        let area = geo.area();
        Self {
            geo,
            arena: DisjointSet::new(area),
            groups: GroupRegistry::new(area),
            legal: LegalMoves::new(area),
            placements: Vec::with_capacity(area),
            current_player: first,
            last_move: None,
        }
    }

    /// Clear the board and let `start_player` move first.
    pub fn init_board(&mut self, start_player: usize) -> Result<(), GameError> {
        let first = Color::from_index(start_player)?;
        *self = Self::fresh(self.geo, first);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geo
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.geo.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.geo.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.geo.area()
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn opponent(&self) -> Color {
        self.current_player.opponent()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    /// Number of stones placed so far.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.placements.len()
    }

    /// Placed stones in move order.
    pub fn placements(&self) -> &[(Point, Color)] {
        &self.placements
    }

    pub fn stone_at(&self, point: Point) -> Option<Color> {
        if !self.geo.contains(point) {
            return None;
        }
        self.arena.owner(point)
    }

    pub fn legal_moves(&self, color: Color) -> &[Point] {
        self.legal.list(color)
    }

    /// Legal moves of the player to move.
    pub fn current_legal_moves(&self) -> &[Point] {
        self.legal.list(self.current_player)
    }

    /// Whether the player to move may play `point`.
    pub fn is_legal(&self, point: Point) -> bool {
        self.legal.contains(self.current_player, point)
    }

    /// Root of the group holding `point`, `None` if the point is empty.
    pub fn find(&self, point: Point) -> Option<Point> {
        if !self.geo.contains(point) {
            return None;
        }
        self.arena.find(point)
    }

    /// The group holding `point`, with its root.
    pub fn group_of(&self, point: Point) -> Option<(Point, &Group)> {
        let root = self.find(point)?;
        self.groups.get(root).map(|g| (root, g))
    }

    /// All live groups with their roots.
    pub fn groups(&self) -> impl Iterator<Item = (Point, &Group)> + '_ {
        self.groups.iter()
    }

    pub fn move_to_location(&self, point: Point) -> Result<(usize, usize), GameError> {
        self.geo.move_to_location(point)
    }

    pub fn location_to_move(&self, location: &[usize]) -> Result<Point, GameError> {
        self.geo.location_to_move(location)
    }

    pub fn status(&self) -> GameStatus {
        if self.current_legal_moves().is_empty() {
            GameStatus::Ended {
                winner: self.opponent(),
            }
        } else {
            GameStatus::InProgress
        }
    }

    /// `(ended, winner)`. The winner is always the player who moved last.
    pub fn game_end(&self) -> (bool, Option<Color>) {
        match self.status() {
            GameStatus::Ended { winner } => (true, Some(winner)),
            GameStatus::InProgress => (false, None),
        }
    }

    // -------------------------------------------------------------------------
    // Move application
    // -------------------------------------------------------------------------

    /// Place a stone for the player to move at `point`.
    ///
    /// Nothing is mutated unless the move is legal.
    pub fn apply(&mut self, point: Point) -> Result<(), GameError> {
        let reason = if !self.geo.contains(point) {
            Some(IllegalReason::OffBoard)
        } else if !self.arena.is_empty(point) {
            Some(IllegalReason::Occupied)
        } else if !self.legal.contains(self.current_player, point) {
            Some(IllegalReason::NotLegal)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(GameError::IllegalMove { point, reason });
        }

        self.maintain_groups(point);
        self.placements.push((point, self.current_player));
        self.last_move = Some(point);
        self.current_player = self.current_player.opponent();
        self.legal.refresh(&self.geo, &self.arena, &self.groups);
        Ok(())
    }

    fn maintain_groups(&mut self, point: Point) {
        let me = self.current_player;
        let opp = me.opponent();
        self.arena.assign(point, me);

        let neighbors = self.geo.neighbors(point);
        let blanks: BTreeSet<Point> = neighbors
            .into_iter()
            .flatten()
            .filter(|&u| self.arena.is_empty(u))
            .collect();
        self.groups.insert(point, Group::new(me, blanks));

        for u in neighbors.into_iter().flatten() {
            if self.arena.owner(u) != Some(opp) {
                continue;
            }
            if let Some(group) = self.arena.find(u).and_then(|r| self.groups.get_mut(r)) {
                group.liberties.remove(&point);
            }
        }

        for u in neighbors.into_iter().flatten() {
            if self.arena.owner(u) != Some(me) {
                continue;
            }
            let Some(root) = self.arena.find(u) else {
                continue;
            };
            // Two neighbours of the same group: already merged
            if root == point {
                continue;
            }
            self.arena.union(root, point);
            if let Some(absorbed) = self.groups.remove(root) {
                if let Some(merged) = self.groups.get_mut(point) {
                    merged.liberties.extend(absorbed.liberties);
                }
            }
        }

        if let Some(merged) = self.groups.get_mut(point) {
            merged.liberties.remove(&point);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..self.width() {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in (0..self.height()).rev() {
            write!(f, "{row:>4}")?;
            for col in 0..self.width() {
                let ch = match self.arena.owner(row * self.width() + col) {
                    Some(c) => c.symbol(),
                    None => '_',
                };
                write!(f, "{ch:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
