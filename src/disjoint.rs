//! Disjoint-set arena over board points.
//!
//! One entry per point. An entry whose `parent` is `None` is empty and has
//! never been part of a union; an occupied entry either points to itself
//! (a root) or to another stone of the same group.
//!
//! There is no path compression: boards are small and `union` always makes
//! the newest stone the root, so chains stay short for contiguous play.

use crate::board::Color;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisjointEntry {
    pub parent: Option<Point>,
    pub owner: Option<Color>,
}

impl DisjointEntry {
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.parent.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct DisjointSet {
    entries: Vec<DisjointEntry>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            entries: vec![DisjointEntry::default(); size],
        }
    }

    #[inline]
    pub fn entry(&self, point: Point) -> DisjointEntry {
        self.entries[point]
    }

    #[inline]
    pub fn owner(&self, point: Point) -> Option<Color> {
        self.entries[point].owner
    }

    #[inline]
    pub fn is_empty(&self, point: Point) -> bool {
        !self.entries[point].is_assigned()
    }

    /// Mark `point` as occupied by `color`, as its own root.
    pub fn assign(&mut self, point: Point, color: Color) {
        self.entries[point] = DisjointEntry {
            parent: Some(point),
            owner: Some(color),
        };
    }

    /// Walk parent links from `point` to its root.
    ///
    /// Returns `None` for an empty point.
    pub fn find(&self, point: Point) -> Option<Point> {
        let mut current = point;
        loop {
            let parent = self.entries[current].parent?;
            if parent == current {
                return Some(current);
            }
            current = parent;
        }
    }

    /// Re-parent the root `absorbed` under `new_root`.
    ///
    /// Directional: the newly placed stone becomes the representative.
    pub fn union(&mut self, absorbed: Point, new_root: Point) {
        debug_assert_eq!(self.find(absorbed), Some(absorbed));
        self.entries[absorbed].parent = Some(new_root);
    }

    /// Depth of `point` below its root (0 for a root), `None` if empty.
    pub fn depth(&self, point: Point) -> Option<usize> {
        let mut current = point;
        let mut depth = 0;
        loop {
            let parent = self.entries[current].parent?;
            if parent == current {
                return Some(depth);
            }
            current = parent;
            depth += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_arena_is_unassigned() {
        let ds = DisjointSet::new(9);
        for pt in 0..9 {
            assert!(ds.is_empty(pt));
            assert_eq!(ds.find(pt), None);
            assert_eq!(ds.owner(pt), None);
        }
    }

    #[test]
    fn test_assign_is_self_rooted() {
        let mut ds = DisjointSet::new(9);
        ds.assign(4, Color::Black);
        assert_eq!(ds.find(4), Some(4));
        assert_eq!(ds.owner(4), Some(Color::Black));
        assert_eq!(ds.depth(4), Some(0));
    }

    #[test]
    fn test_union_makes_newest_root() {
        let mut ds = DisjointSet::new(9);
        ds.assign(0, Color::White);
        ds.assign(1, Color::White);
        ds.union(0, 1);
        ds.assign(2, Color::White);
        ds.union(1, 2);
        assert_eq!(ds.find(0), Some(2));
        assert_eq!(ds.find(1), Some(2));
        assert_eq!(ds.depth(0), Some(2));
        assert_eq!(ds.depth(2), Some(0));
    }
}
