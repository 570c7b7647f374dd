//! Group records keyed by disjoint-set root.

use std::collections::BTreeSet;

use crate::board::Color;
use crate::geometry::Point;

/// A connected group of same-colored stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub owner: Color,
    /// Empty points orthogonally adjacent to any stone of the group.
    pub liberties: BTreeSet<Point>,
}

impl Group {
    pub fn new(owner: Color, liberties: BTreeSet<Point>) -> Self {
        Self { owner, liberties }
    }

    #[inline]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// Fewer than two liberties.
    #[inline]
    pub fn in_atari(&self) -> bool {
        self.liberties.len() < 2
    }
}

/// One slot per board point; a slot holds a group only while that point is
/// a live root.
#[derive(Debug, Clone)]
pub struct GroupRegistry {
    slots: Vec<Option<Group>>,
    live: usize,
}

impl GroupRegistry {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
            live: 0,
        }
    }

    #[inline]
    pub fn get(&self, root: Point) -> Option<&Group> {
        self.slots[root].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, root: Point) -> Option<&mut Group> {
        self.slots[root].as_mut()
    }

    pub fn insert(&mut self, root: Point, group: Group) {
        if self.slots[root].replace(group).is_none() {
            self.live += 1;
        }
    }

    pub fn remove(&mut self, root: Point) -> Option<Group> {
        let group = self.slots[root].take();
        if group.is_some() {
            self.live -= 1;
        }
        group
    }

    /// Number of live groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live groups with their roots, in point order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Group)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(root, g)| g.as_ref().map(|g| (root, g)))
    }
}
