//! An occupancy grid for maze representation.
//!
//! [`Cell`] marks a location as open or blocked. [`Grid`] is a dense
//! row-major 2D array of cells anchored at the origin, built cell by cell,
//! from nested `0`/`1` rows, or parsed from text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geom::{Point, Range};

/// Occupancy of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Traversable.
    #[default]
    Open,
    /// Wall.
    Blocked,
}

impl Cell {
    /// Whether a path may pass through this cell.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Glyph used by [`Grid`]'s `Display` impl.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => '#',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' | '.' | ' ' => Some(Cell::Open),
            '1' | '#' => Some(Cell::Blocked),
            _ => None,
        }
    }
}

/// `0` is open, any other value is a wall.
impl From<u8> for Cell {
    fn from(v: u8) -> Self {
        if v == 0 { Cell::Open } else { Cell::Blocked }
    }
}

/// Errors that can occur when building a grid from rows or text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows of zero width.
    #[error("maze is empty")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("maze row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither an open nor a blocked marker.
    #[error("maze contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// More cells than a grid can index.
    #[error("maze of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
    /// Stored cells disagree with the stated dimensions.
    #[error("maze has {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },
}

/// Validated dimensions: both sides and their product fit in `i32`, so
/// every in-bounds point has a non-negative `i32` index.
fn checked_size(width: usize, height: usize) -> Result<(i32, i32, usize), GridError> {
    let w = i32::try_from(width).ok();
    let h = i32::try_from(height).ok();
    w.zip(h)
        .and_then(|(w, h)| Some((w, h, w.checked_mul(h)? as usize)))
        .ok_or(GridError::TooLarge { width, height })
}

/// A dense 2D grid of [`Cell`] values covering `[0, width) × [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let (width, height, len) = checked_size(raw.width, raw.height)?;
        if raw.cells.len() != len {
            return Err(GridError::CellCount {
                expected: len,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            width,
            height,
        })
    }
}

impl Grid {
    /// Create a new grid with every cell open. Negative sides count as zero.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let (width, height, len) =
            checked_size(width.max(0) as usize, height.max(0) as usize)?;
        Ok(Self {
            cells: vec![Cell::Open; len],
            width,
            height,
        })
    }

    /// Build a grid from rows of occupancy values (`0` open, non-zero blocked).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let (width, height, len) = checked_size(expected, rows.len())?;
        let mut cells = Vec::with_capacity(len);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| Cell::from(v)));
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a text maze: one line per row, `0`/`.`/space open and `1`/`#`
    /// blocked. Trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let expected = lines.first().map_or(0, |l| l.chars().count());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let (width, height, len) = checked_size(expected, lines.len())?;
        let mut cells = Vec::with_capacity(len);
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::Ragged {
                    row: y,
                    expected,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Returns the bounding range of the grid.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| (p.y * self.width + p.x) as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, cell) in self.iter() {
            write!(f, "{}", cell.glyph())?;
            if p.x == self.width - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(10, 5).unwrap();
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.count(Cell::Open), 50);
    }

    #[test]
    fn test_new_rejects_oversized() {
        assert_eq!(
            Grid::new(50_000, 50_000),
            Err(GridError::TooLarge {
                width: 50_000,
                height: 50_000
            })
        );
        assert_eq!(Grid::new(-3, 2).unwrap().size(), Point::new(0, 2));
    }

    #[test]
    fn test_checked_size_bounds_the_index_space() {
        assert_eq!(checked_size(4, 3), Ok((4, 3, 12)));
        let too_large = |width, height| Err(GridError::TooLarge { width, height });
        assert_eq!(checked_size(1 << 16, 1 << 16), too_large(1 << 16, 1 << 16));
        assert_eq!(checked_size(usize::MAX, 1), too_large(usize::MAX, 1));
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = Point::new(2, 3);
        g.set(p, Cell::Blocked);
        assert_eq!(g.at(p), Some(Cell::Blocked));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell::Open));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        // Out-of-bounds writes are ignored.
        g.set(Point::new(4, 0), Cell::Blocked);
        assert_eq!(g.count(Cell::Blocked), 1);
    }

    #[test]
    fn test_is_open() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set(Point::new(1, 1), Cell::Blocked);
        assert!(g.is_open(Point::new(0, 0)));
        assert!(!g.is_open(Point::new(1, 1)));
        assert!(!g.is_open(Point::new(3, 0)));
    }

    #[test]
    fn test_from_rows_uses_column_row_order() {
        let g = Grid::from_rows(&[[0u8, 1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::new(1, 0)), Some(Cell::Blocked));
        assert_eq!(g.at(Point::new(0, 1)), Some(Cell::Open));
    }

    #[test]
    fn test_from_rows_errors() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
        let ragged = vec![vec![0u8, 0], vec![0]];
        assert_eq!(
            Grid::from_rows(&ragged),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_parse_markers() {
        let g = Grid::parse("0.1\n# .\n\n").unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::new(2, 0)), Some(Cell::Blocked));
        assert_eq!(g.at(Point::new(0, 1)), Some(Cell::Blocked));
        assert_eq!(g.at(Point::new(1, 1)), Some(Cell::Open));
        assert_eq!(g.count(Cell::Blocked), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(Grid::parse("\n\n"), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("..\n...\n"),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::parse("..\n.x\n"),
            Err(GridError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let text = "..#\n#..\n";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.to_string(), text);
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn test_iter_row_major() {
        let g = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1], (Point::new(1, 0), Cell::Blocked));
        assert_eq!(cells[2], (Point::new(0, 1), Cell::Blocked));
    }
}
