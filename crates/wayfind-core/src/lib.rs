//! **wayfind-core** — foundational types for grid pathfinding.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! occupancy [`Grid`] that the search engine in `wayfind-paths` walks over.
//! Mazes can be built cell by cell, from nested rows, or parsed from text.

pub mod geom;
pub mod grid;

pub use geom::{ParsePointError, Point, Range, RangeIter};
pub use grid::{Cell, Grid, GridError};
