//! Maze sources shared by the demo binaries: the built-in 10×10 maze and a
//! seeded random generator.

use rand::Rng;
use wayfind_core::{Cell, Grid, GridError};

pub const ORIGINAL_WIDTH: i32 = 10;
pub const ORIGINAL_HEIGHT: i32 = 10;

const ORIGINAL: [[u8; ORIGINAL_WIDTH as usize]; ORIGINAL_HEIGHT as usize] = [
    [0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 1, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
];

/// The built-in 10×10 maze: a wall down column 3 open at the bottom, a
/// pocket in the middle, and a wall down column 8 open at the top.
pub fn original_maze() -> Result<Grid, GridError> {
    Grid::from_rows(&ORIGINAL)
}

/// A `width × height` maze where each cell is a wall with probability
/// `density` (clamped to `[0, 1]`).
pub fn random_maze<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    density: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let density = density.clamp(0.0, 1.0);
    let mut grid = Grid::new(width, height)?;
    for p in grid.bounds() {
        if rng.random_bool(density) {
            grid.set(p, Cell::Blocked);
        }
    }
    Ok(grid)
}

/// Parse a `WIDTHxHEIGHT` size such as `12x8`.
pub fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid size \u{201c}{s}\u{201d}: expected WIDTHxHEIGHT"))?;
    let parse = |v: &str| -> Result<i32, String> {
        match v.trim().parse::<i32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("invalid dimension \u{201c}{v}\u{201d} in \u{201c}{s}\u{201d}")),
        }
    };
    Ok((parse(w)?, parse(h)?))
}
