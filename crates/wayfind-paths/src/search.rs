use std::collections::HashSet;

use log::{debug, trace};
use wayfind_core::Point;

use crate::distance::euclidean;
use crate::error::{Endpoint, InvalidReason, PathError};
use crate::frontier::{Frontier, FrontierEntry};
use crate::neighbors::Neighbors;
use crate::node::{Node, NodeId};
use crate::path::{Path, reconstruct};
use crate::traits::Pather;

/// Where a [`Search`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// More steps are needed.
    Running,
    /// The goal was reached; a path is available.
    Succeeded,
    /// The frontier drained without reaching the goal.
    Exhausted,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SearchState::Running
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Neighbour cells discovered (each cell at most once).
    pub generated: usize,
    /// Candidates dropped because an equal location already scored better.
    ///
    /// Stays zero on grid searches: candidates are only generated for
    /// undiscovered cells, while every frontier or closed node sits on a
    /// discovered one.
    pub suppressed: usize,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
}

/// Final result of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found { path: Path, stats: SearchStats },
    NoPath { from: Point, to: Point, stats: SearchStats },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::NoPath { .. } => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::NoPath { stats, .. } => *stats,
        }
    }

    /// The path, treating an unreachable goal as [`PathError::NoPath`].
    pub fn into_path(self) -> Result<Path, PathError> {
        match self {
            SearchOutcome::Found { path, .. } => Ok(path),
            SearchOutcome::NoPath { from, to, .. } => Err(PathError::NoPath { from, to }),
        }
    }
}

/// A single A* search from `start` to `goal` over a [`Pather`].
///
/// The search owns every node it creates in an append-only arena; the
/// frontier and closed list refer to nodes by [`NodeId`]. A cell is marked
/// visited the first time it is discovered and never generates a second
/// node, so each search expands at most one node per open cell.
///
/// Drive it with [`step`](Search::step) for one expansion at a time or
/// [`run`](Search::run) to completion.
pub struct Search<P: Pather> {
    pather: P,
    start: Point,
    goal: Point,
    nodes: Vec<Node>,
    frontier: Frontier,
    closed: Vec<NodeId>,
    visited: HashSet<Point>,
    neighbors: Neighbors,
    state: SearchState,
    goal_node: Option<NodeId>,
    stats: SearchStats,
}

impl<P: Pather> Search<P> {
    /// Prepare a search. Both endpoints must be in bounds and passable.
    ///
    /// When `start == goal` the search is already [`SearchState::Succeeded`].
    pub fn new(pather: P, start: Point, goal: Point) -> Result<Self, PathError> {
        check_endpoint(&pather, Endpoint::Start, start)?;
        check_endpoint(&pather, Endpoint::Goal, goal)?;

        let mut search = Self {
            pather,
            start,
            goal,
            nodes: Vec::new(),
            frontier: Frontier::new(),
            closed: Vec::new(),
            visited: HashSet::new(),
            neighbors: Neighbors::new(),
            state: SearchState::Running,
            goal_node: None,
            stats: SearchStats::default(),
        };

        let root = search.push_node(Node::start(start, goal));
        search.visited.insert(start);
        debug!(
            "search from {start} to {goal} within {}",
            search.pather.bounds()
        );

        if start == goal {
            search.goal_node = Some(root);
            search.state = SearchState::Succeeded;
            debug!("start is the goal, nothing to expand");
        } else {
            let entry = FrontierEntry::for_node(root, &search.nodes[root.index()]);
            search.frontier.insert(entry);
            search.stats.frontier_peak = 1;
        }
        Ok(search)
    }

    /// Expand the best frontier node and return the resulting state.
    ///
    /// Once the search is terminal this does nothing and returns the same
    /// state again.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        let Some(entry) = self.frontier.extract_min() else {
            return self.finish(SearchState::Exhausted);
        };

        let current_id = entry.id;
        let current = self.nodes[current_id.index()];
        self.stats.expanded += 1;
        trace!(
            "expand {} g={:.3} f={:.3}",
            current.location(),
            current.g_score(),
            current.f_score()
        );

        let mut neighbors = std::mem::take(&mut self.neighbors);
        let bounds = self.pather.bounds();
        let generated = neighbors.all(current.location(), |n| {
            bounds.contains(n) && !self.visited.contains(&n) && self.pather.passable(n)
        });
        self.visited.extend(generated.iter().copied());
        self.stats.generated += generated.len();

        let mut reached = None;
        for &np in generated {
            let g = current.g_score() + euclidean(current.location(), np);

            if np == self.goal {
                reached = Some(self.push_node(Node::new(np, Some(current_id), g, 0.0)));
                break;
            }

            let h = euclidean(np, self.goal);
            let f = g + h;
            if self.is_dominated(np, f) {
                self.stats.suppressed += 1;
                trace!("suppress {np} f={f:.3}");
                continue;
            }

            let id = self.push_node(Node::new(np, Some(current_id), g, h));
            self.frontier.insert(FrontierEntry::new(id, np, f));
        }
        self.neighbors = neighbors;

        if let Some(id) = reached {
            self.goal_node = Some(id);
            return self.finish(SearchState::Succeeded);
        }

        self.closed.push(current_id);
        self.stats.frontier_peak = self.stats.frontier_peak.max(self.frontier.len());
        self.state
    }

    /// Step until the search is terminal and report the outcome.
    pub fn run(&mut self) -> SearchOutcome {
        while !self.step().is_terminal() {}
        match self.path() {
            Some(path) => SearchOutcome::Found {
                path,
                stats: self.stats,
            },
            None => SearchOutcome::NoPath {
                from: self.start,
                to: self.goal,
                stats: self.stats,
            },
        }
    }

    /// The reconstructed path, once the search has succeeded.
    pub fn path(&self) -> Option<Path> {
        self.goal_node.map(|id| reconstruct(&self.nodes, id))
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Ids of expanded nodes in the order they were closed.
    pub fn closed(&self) -> &[NodeId] {
        &self.closed
    }

    /// Every node created so far, indexed by [`NodeId`].
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Whether `p` has been discovered by this search.
    pub fn is_visited(&self, p: Point) -> bool {
        self.visited.contains(&p)
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Whether the frontier or the closed list already holds `location` with
    /// an `f` strictly below `f`.
    fn is_dominated(&self, location: Point, f: f64) -> bool {
        self.frontier.contains_lt(location, f)
            || self.closed.iter().any(|id| {
                let n = &self.nodes[id.index()];
                n.location() == location && n.f_score() < f
            })
    }

    fn finish(&mut self, state: SearchState) -> SearchState {
        self.state = state;
        match state {
            SearchState::Succeeded => debug!(
                "reached {} after {} expansions, cost {:.3}",
                self.goal,
                self.stats.expanded,
                self.goal_node
                    .map_or(0.0, |id| self.nodes[id.index()].g_score())
            ),
            _ => debug!(
                "no path to {} after {} expansions",
                self.goal, self.stats.expanded
            ),
        }
        state
    }
}

fn check_endpoint<P: Pather>(pather: &P, endpoint: Endpoint, point: Point) -> Result<(), PathError> {
    let reason = if !pather.bounds().contains(point) {
        InvalidReason::OutOfBounds
    } else if !pather.passable(point) {
        InvalidReason::Blocked
    } else {
        return Ok(());
    };
    Err(PathError::InvalidCoordinate {
        endpoint,
        point,
        reason,
    })
}

/// Find a path from `start` to `goal` with a fresh [`Search`].
pub fn astar_path<P: Pather>(pather: P, start: Point, goal: Point) -> Result<SearchOutcome, PathError> {
    Ok(Search::new(pather, start, goal)?.run())
}
