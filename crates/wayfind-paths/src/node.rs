use wayfind_core::Point;

use crate::distance::euclidean;

/// Index of a [`Node`] in a search's node arena.
///
/// Ids are handed out in creation order, so a parent's id is always smaller
/// than its children's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One explored or frontier cell.
///
/// Scores are fixed at construction. A node is never rescored; a better
/// route to the same cell would be a different node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    location: Point,
    parent: Option<NodeId>,
    g_score: f64,
    h_score: f64,
}

impl Node {
    /// Create a node. Both scores must be non-negative.
    pub fn new(location: Point, parent: Option<NodeId>, g_score: f64, h_score: f64) -> Self {
        debug_assert!(g_score >= 0.0, "negative g score {g_score}");
        debug_assert!(h_score >= 0.0, "negative h score {h_score}");
        Self {
            location,
            parent,
            g_score,
            h_score,
        }
    }

    /// The root node of a search: no parent, zero cost so far.
    pub fn start(location: Point, goal: Point) -> Self {
        Self::new(location, None, 0.0, euclidean(location, goal))
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.location
    }

    /// The node this one was expanded from, `None` for the start node.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Cost of the path that produced this node.
    #[inline]
    pub fn g_score(&self) -> f64 {
        self.g_score
    }

    /// Estimated remaining cost to the goal.
    #[inline]
    pub fn h_score(&self) -> f64 {
        self.h_score
    }

    /// `g + h`, the frontier ordering key.
    #[inline]
    pub fn f_score(&self) -> f64 {
        self.g_score + self.h_score
    }
}
