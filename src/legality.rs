//! Per-color legal move lists and the rule that refreshes them.
//!
//! Each color keeps its own ordered list of playable points plus a mask for
//! O(1) membership. After every placement the lists are filtered in place:
//! stones are never removed in this variant and group liberties only shrink,
//! so a point that has become illegal for a color never becomes legal again.

use crate::board::Color;
use crate::disjoint::DisjointSet;
use crate::geometry::{Geometry, Point};
use crate::group::GroupRegistry;

#[derive(Debug, Clone)]
struct MoveList {
    order: Vec<Point>,
    mask: Vec<bool>,
}

impl MoveList {
    fn full(area: usize) -> Self {
        Self {
            order: (0..area).collect(),
            mask: vec![true; area],
        }
    }

    fn retain(&mut self, mut keep: impl FnMut(Point) -> bool) {
        let mask = &mut self.mask;
        self.order.retain(|&pt| {
            let k = keep(pt);
            if !k {
                mask[pt] = false;
            }
            k
        });
    }
}

/// The two independently maintained legal move lists.
#[derive(Debug, Clone)]
pub struct LegalMoves {
    lists: [MoveList; 2],
}

impl LegalMoves {
    /// Every point legal for both colors.
    pub fn new(area: usize) -> Self {
        Self {
            lists: [MoveList::full(area), MoveList::full(area)],
        }
    }

    #[inline]
    pub fn list(&self, color: Color) -> &[Point] {
        &self.lists[color.index()].order
    }

    #[inline]
    pub fn contains(&self, color: Color, point: Point) -> bool {
        self.lists[color.index()]
            .mask
            .get(point)
            .copied()
            .unwrap_or(false)
    }

    /// Re-evaluate every listed point for both colors after a placement.
    pub fn refresh(&mut self, geo: &Geometry, arena: &DisjointSet, groups: &GroupRegistry) {
        for color in [Color::Black, Color::White] {
            self.lists[color.index()].retain(|q| is_playable(geo, arena, groups, q, color));
        }
    }
}

/// Whether `color` may occupy `q` right now.
///
/// `q` is refused if any occupied neighbour, of either color, belongs to a
/// group with fewer than two liberties. Otherwise it needs at least one
/// empty neighbour or one friendly neighbour; with no captures a stone
/// surrounded only by enemy stones would have no liberties.
pub fn is_playable(
    geo: &Geometry,
    arena: &DisjointSet,
    groups: &GroupRegistry,
    q: Point,
    color: Color,
) -> bool {
    if !arena.is_empty(q) {
        return false;
    }
    let mut credits = 0;
    for u in geo.neighbors(q).into_iter().flatten() {
        let Some(root) = arena.find(u) else {
            credits += 1;
            continue;
        };
        debug_assert!(groups.get(root).is_some(), "no group at root {root}");
        if groups.get(root).is_some_and(|g| g.in_atari()) {
            return false;
        }
        if arena.owner(u) == Some(color) {
            credits += 1;
        }
    }
    credits > 0
}
