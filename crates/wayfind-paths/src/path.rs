use wayfind_core::Point;

use crate::node::{Node, NodeId};

/// One step of a reconstructed path with the scores its node was created
/// with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub location: Point,
    pub g_score: f64,
    pub h_score: f64,
}

impl PathNode {
    #[inline]
    pub fn f_score(&self) -> f64 {
        self.g_score + self.h_score
    }
}

impl From<&Node> for PathNode {
    fn from(node: &Node) -> Self {
        Self {
            location: node.location(),
            g_score: node.g_score(),
            h_score: node.h_score(),
        }
    }
}

/// An ordered start → goal sequence of [`PathNode`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    nodes: Vec<PathNode>,
}

impl Path {
    /// Number of nodes, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&PathNode> {
        self.nodes.first()
    }

    pub fn goal(&self) -> Option<&PathNode> {
        self.nodes.last()
    }

    /// Total cost, i.e. the goal's `g_score` (0 for an empty path).
    pub fn cost(&self) -> f64 {
        self.goal().map_or(0.0, |n| n.g_score)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.nodes.iter().any(|n| n.location == p)
    }

    pub fn locations(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.location)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[PathNode] {
        &self.nodes
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl From<Vec<PathNode>> for Path {
    fn from(nodes: Vec<PathNode>) -> Self {
        Self { nodes }
    }
}

/// Walk parent links from `goal` back to the root of `nodes` and return the
/// chain in start → goal order.
///
/// Scores are copied as recorded, not recomputed.
///
/// # Panics
///
/// Panics if `goal` or one of its ancestors is not an index into `nodes`.
pub fn reconstruct(nodes: &[Node], goal: NodeId) -> Path {
    let mut chain = Vec::new();
    let mut current = Some(goal);
    while let Some(id) = current {
        let node = &nodes[id.index()];
        chain.push(PathNode::from(node));
        current = node.parent();
    }
    chain.reverse();
    Path { nodes: chain }
}
