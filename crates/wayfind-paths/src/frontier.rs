use log::debug;
use wayfind_core::Point;

use crate::error::PathError;
use crate::node::{Node, NodeId};

/// Reference into the node arena, keyed by `f` for the frontier heap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierEntry {
    pub id: NodeId,
    pub location: Point,
    pub f_score: f64,
}

impl FrontierEntry {
    pub fn new(id: NodeId, location: Point, f_score: f64) -> Self {
        Self {
            id,
            location,
            f_score,
        }
    }

    /// Entry for `node`, which lives at `id` in the arena.
    pub fn for_node(id: NodeId, node: &Node) -> Self {
        Self::new(id, node.location(), node.f_score())
    }
}

/// Binary min-heap of [`FrontierEntry`] values ordered by ascending `f_score`.
///
/// Several entries may share a location; nothing is deduplicated on insert.
/// [`extract_min`](Frontier::extract_min) is the only way to remove an entry.
///
/// The location queries scan every entry. That is fine for maze-sized grids;
/// larger maps would want a location → best `f` index kept alongside the
/// heap.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: Vec<FrontierEntry>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add an entry, sifting it up past every parent with a strictly larger
    /// `f_score`.
    pub fn insert(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the entry with the smallest `f_score`.
    ///
    /// An empty frontier yields `None` and leaves the frontier untouched.
    pub fn extract_min(&mut self) -> Option<FrontierEntry> {
        if self.heap.is_empty() {
            debug!("extract_min on an empty frontier");
            return None;
        }
        // The last entry takes the root slot, then sinks.
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Like [`extract_min`](Frontier::extract_min), but an empty frontier is
    /// reported as [`PathError::EmptyFrontier`].
    pub fn try_extract_min(&mut self) -> Result<FrontierEntry, PathError> {
        self.extract_min().ok_or(PathError::EmptyFrontier)
    }

    /// The entry [`extract_min`](Frontier::extract_min) would return next.
    #[inline]
    pub fn peek_min(&self) -> Option<&FrontierEntry> {
        self.heap.first()
    }

    /// Whether an entry at `location` has an `f_score` of at most `f_score`.
    pub fn contains_leq(&self, location: Point, f_score: f64) -> bool {
        self.heap
            .iter()
            .any(|e| e.location == location && e.f_score <= f_score)
    }

    /// Whether an entry at `location` has an `f_score` strictly below
    /// `f_score`.
    pub fn contains_lt(&self, location: Point, f_score: f64) -> bool {
        self.heap
            .iter()
            .any(|e| e.location == location && e.f_score < f_score)
    }

    /// Entries in heap order (only the first is guaranteed to be minimal).
    pub fn iter(&self) -> std::slice::Iter<'_, FrontierEntry> {
        self.heap.iter()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].f_score < self.heap[parent].f_score {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            // Right only wins when strictly smaller, so ties go left.
            if left < len && self.heap[left].f_score < self.heap[smallest].f_score {
                smallest = left;
            }
            if right < len && self.heap[right].f_score < self.heap[smallest].f_score {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
