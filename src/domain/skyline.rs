//! Skyline accumulator: an arena-backed binary tree of buildings.
//!
//! Each non-empty node holds a building; everything in its left subtree lies
//! left of it and everything in its right subtree lies right of it. Inserting
//! a building that overlaps a node splits the pair into a left part, a right
//! part and their intersection at the taller height. The parts travel down
//! to the children, the intersection replaces the node's building.
//!
//! The tree is never rebalanced. Inserting buildings in order of their start
//! degrades it into a list, so insertion costs O(n) and building a skyline
//! from n such buildings O(n^2).

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::domain::building::Building;
use crate::domain::error::{DomainError, DomainResult};

/// Tree node in the arena. Children are created on demand and never re-linked.
#[derive(Debug, Default)]
pub struct SkylineNode {
    /// Building shown at this node, [`Building::EMPTY`] until first insertion
    pub building: Building,
    /// Subtree of buildings left of `building`
    pub left: Option<Index>,
    /// Subtree of buildings right of `building`
    pub right: Option<Index>,
}

/// Incrementally maintained skyline.
///
/// Nodes live in an arena owned by the skyline, so no node can have two
/// parents and the tree can not contain cycles.
#[derive(Debug)]
pub struct Skyline {
    arena: Arena<SkylineNode>,
    root: Index,
}

impl Default for Skyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Skyline {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(SkylineNode::default());
        Self { arena, root }
    }

    /// Insert a building, keeping the taller height wherever it overlaps
    /// what is already there. Empty buildings are ignored.
    ///
    /// Returns `self` so insertions can be chained.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, added: Building) -> &mut Self {
        let mut pending = vec![(self.root, added)];

        while let Some((idx, added)) = pending.pop() {
            if added.is_empty() {
                continue;
            }
            let Some(current) = self.arena.get(idx).map(|n| n.building) else {
                continue;
            };

            if current.is_empty() {
                trace!(%added, "occupying empty node");
                self.set_building(idx, added);
                continue;
            }

            let (left, right) = self.ensure_children(idx);

            if added.is_right_of(&current) {
                pending.push((right, added));
                continue;
            }
            if added.is_left_of(&current) {
                pending.push((left, added));
                continue;
            }

            // Both parts are taken from the building as it was before the
            // intersection replaces it.
            let left_part = current.left_part_of_both(&added);
            let right_part = current.right_part_of_both(&added);
            let middle = added.intersect(&current);
            debug!(%current, %added, %left_part, %middle, %right_part, "splitting overlap");

            pending.push((left, left_part));
            pending.push((right, right_part));
            if middle.is_not_empty() {
                self.set_building(idx, middle);
            }
        }

        self
    }

    /// Balancing the tree is not supported.
    pub fn balance(&self) -> DomainResult<Skyline> {
        Err(DomainError::BalancingNotImplemented)
    }

    /// The skyline as a sorted list in which touching buildings of the same
    /// height are merged into one. This is what a renderer draws.
    ///
    /// A skyline without any non-empty insertion yields an empty list.
    #[instrument(level = "trace", skip(self))]
    pub fn flatten(&self) -> Vec<Building> {
        self.iter()
            .coalesce(|current, next| {
                if current.is_left_adjacent_of(&next) && current.is_same_height(&next) {
                    Ok(Building {
                        end: next.end,
                        ..current
                    })
                } else {
                    Err((current, next))
                }
            })
            .collect()
    }

    /// In-order iterator over the non-empty buildings, not merged.
    pub fn iter(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// True until a non-empty building has been inserted.
    pub fn is_empty(&self) -> bool {
        self.arena
            .get(self.root)
            .map_or(true, |n| n.building.is_empty())
    }

    /// Number of non-empty buildings held by the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Allocated nodes, including empty leaves waiting for content.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Longest chain of non-empty nodes from the root down.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 1)];

        while let Some((idx, depth)) = stack.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            if node.building.is_empty() {
                continue;
            }
            max_depth = max_depth.max(depth);
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }

        max_depth
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&SkylineNode> {
        self.arena.get(idx)
    }

    fn set_building(&mut self, idx: Index, building: Building) {
        if let Some(node) = self.arena.get_mut(idx) {
            node.building = building;
        }
    }

    fn ensure_children(&mut self, idx: Index) -> (Index, Index) {
        let (left, right) = match self.arena.get(idx) {
            Some(node) => (node.left, node.right),
            None => (None, None),
        };

        let left = match left {
            Some(left) => left,
            None => {
                let left = self.arena.insert(SkylineNode::default());
                if let Some(node) = self.arena.get_mut(idx) {
                    node.left = Some(left);
                }
                left
            }
        };
        let right = match right {
            Some(right) => right,
            None => {
                let right = self.arena.insert(SkylineNode::default());
                if let Some(node) = self.arena.get_mut(idx) {
                    node.right = Some(right);
                }
                right
            }
        };

        (left, right)
    }
}

impl Extend<Building> for Skyline {
    fn extend<T: IntoIterator<Item = Building>>(&mut self, iter: T) {
        for building in iter {
            self.insert(building);
        }
    }
}

impl FromIterator<Building> for Skyline {
    fn from_iter<T: IntoIterator<Item = Building>>(iter: T) -> Self {
        let mut skyline = Skyline::new();
        skyline.extend(iter);
        skyline
    }
}

/// Left-to-right walk over the non-empty buildings of a [`Skyline`].
pub struct InOrderIterator<'a> {
    skyline: &'a Skyline,
    stack: Vec<Index>,
    next_left: Option<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(skyline: &'a Skyline) -> Self {
        Self {
            skyline,
            stack: Vec::new(),
            next_left: Some(skyline.root),
        }
    }
}

impl Iterator for InOrderIterator<'_> {
    type Item = Building;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(idx) = self.next_left {
                self.stack.push(idx);
                self.next_left = self.skyline.get_node(idx).and_then(|n| n.left);
            }

            let node = self.skyline.get_node(self.stack.pop()?)?;
            self.next_left = node.right;
            if node.building.is_not_empty() {
                return Some(node.building);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Skyline {
    type Item = Building;
    type IntoIter = InOrderIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
