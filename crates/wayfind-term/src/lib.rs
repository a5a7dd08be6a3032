//! Terminal rendering for wayfind.
//!
//! Turns a finished [`Path`] into two text views: a table listing every
//! node with its scores ([`node_table`]) and a picture of the maze with the
//! path drawn over it ([`grid_view`]). Colour is applied through crossterm's
//! styling when the [`Palette`] enables it, and [`write_report`] queues the
//! whole report to any writer.

use std::io::{self, IsTerminal, Write};

use crossterm::{
    queue,
    style::{Print, Stylize},
};

use wayfind_core::{Cell, Grid, Point};
use wayfind_paths::Path;

/// Glyph for a cell on the path.
pub const PATH_GLYPH: char = 'O';
/// Glyph for a blocked cell.
pub const WALL_GLYPH: char = '|';
/// Glyph for an open cell off the path.
pub const OPEN_GLYPH: char = '.';

/// ANSI colouring switch: bold green for the path and headers, bold red for
/// walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    /// No escape sequences at all.
    pub const PLAIN: Palette = Palette { color: false };
    /// Always colour.
    pub const ANSI: Palette = Palette { color: true };

    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            color: io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    fn path(self, s: &str) -> String {
        if self.color {
            s.green().bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn wall(self, s: &str) -> String {
        if self.color {
            s.red().bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn header(self, s: &str) -> String {
        self.path(s)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// Layout of [`node_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    /// Width of every column.
    pub column_width: usize,
    /// Digits after the decimal point for scores.
    pub precision: usize,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            column_width: 20,
            precision: 4,
        }
    }
}

/// Layout of [`grid_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStyle {
    /// Width each glyph is centred in.
    pub cell_width: usize,
    /// Blank lines printed after every row.
    pub row_spacing: usize,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            cell_width: 9,
            row_spacing: 1,
        }
    }
}

/// Table of the path's nodes: 1-based index, `(column, row)` location and
/// the g, h and f scores recorded when each node was created.
pub fn node_table(path: &Path, style: &TableStyle, palette: Palette) -> String {
    let w = style.column_width;
    let prec = style.precision;
    let header = format!(
        "{:<w$}{:>w$}{:>w$}{:>w$}{:>w$}",
        "Node:", "Location:", "G Score:", "H Score:", "F Score:"
    );
    let mut out = palette.header(&header);
    out.push('\n');
    for (i, node) in path.iter().enumerate() {
        out.push_str(&format!(
            "{:<w$}{:>w$}{:>w$.prec$}{:>w$.prec$}{:>w$.prec$}\n",
            i + 1,
            node.location.to_string(),
            node.g_score,
            node.h_score,
            node.f_score(),
        ));
    }
    out
}

/// The maze with path cells, walls and open cells drawn with distinct
/// glyphs, one text line per grid row.
pub fn grid_view(grid: &Grid, path: &Path, style: &GridStyle, palette: Palette) -> String {
    let w = style.cell_width;
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            if path.contains(p) {
                out.push_str(&palette.path(&format!("{PATH_GLYPH:^w$}")));
            } else if grid.at(p) == Some(Cell::Blocked) {
                out.push_str(&palette.wall(&format!("{WALL_GLYPH:^w$}")));
            } else {
                out.push_str(&format!("{OPEN_GLYPH:^w$}"));
            }
        }
        out.push('\n');
        for _ in 0..style.row_spacing {
            out.push('\n');
        }
    }
    out
}

/// A dashed rule of `width` characters with `title` centred in it.
pub fn banner(title: &str, width: usize) -> String {
    if title.is_empty() {
        return "-".repeat(width);
    }
    format!("{:-^width$}", format!(" {title} "))
}

/// Table and grid view under their banners, queued to `out` and flushed.
pub fn write_report<W: Write>(
    out: &mut W,
    grid: &Grid,
    path: &Path,
    palette: Palette,
) -> io::Result<()> {
    let table = TableStyle::default();
    let view = GridStyle::default();
    let width = table.column_width * 5;
    queue!(
        out,
        Print(banner("Table of nodes", width)),
        Print("\n"),
        Print(node_table(path, &table, palette)),
        Print(banner("", width)),
        Print("\n\n"),
        Print(banner("Visual representation", width)),
        Print("\n"),
        Print(grid_view(grid, path, &view, palette)),
        Print(banner("", width)),
        Print("\n"),
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_paths::astar_path;

    fn diagonal() -> (Grid, Path) {
        let grid = Grid::new(3, 3).unwrap();
        let path = astar_path(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .into_path()
            .unwrap();
        (grid, path)
    }

    #[test]
    fn table_lists_every_node() {
        let (_, path) = diagonal();
        let style = TableStyle {
            column_width: 10,
            precision: 2,
        };
        let table = node_table(&path, &style, Palette::PLAIN);
        let expected = "\
Node:      Location:  G Score:  H Score:  F Score:
1             (0, 0)      0.00      2.83      2.83
2             (1, 1)      1.41      1.41      2.83
3             (2, 2)      2.83      0.00      2.83
";
        assert_eq!(table, expected);
    }

    #[test]
    fn grid_marks_path_walls_and_open_cells() {
        let grid = Grid::parse("..#..\n..#..\n.....\n").unwrap();
        let path = astar_path(&grid, Point::new(0, 0), Point::new(4, 0))
            .unwrap()
            .into_path()
            .unwrap();
        let style = GridStyle {
            cell_width: 1,
            row_spacing: 0,
        };
        let view = grid_view(&grid, &path, &style, Palette::PLAIN);
        assert_eq!(view, "O.|.O\n.O|O.\n..O..\n");
    }

    #[test]
    fn grid_centres_glyphs() {
        let (grid, path) = diagonal();
        let style = GridStyle {
            cell_width: 3,
            row_spacing: 1,
        };
        let view = grid_view(&grid, &path, &style, Palette::PLAIN);
        assert_eq!(view, " O  .  . \n\n .  O  . \n\n .  .  O \n\n");
    }

    #[test]
    fn palette_adds_escapes_only_when_enabled() {
        let (grid, path) = diagonal();
        let style = GridStyle::default();
        assert!(!grid_view(&grid, &path, &style, Palette::PLAIN).contains('\x1b'));
        assert!(grid_view(&grid, &path, &style, Palette::ANSI).contains('\x1b'));
    }

    #[test]
    fn banner_centres_title() {
        assert_eq!(banner("abc", 11), "--- abc ---");
        assert_eq!(banner("", 4), "----");
    }

    #[test]
    fn report_contains_both_views() {
        let (grid, path) = diagonal();
        let mut buf = Vec::new();
        write_report(&mut buf, &grid, &path, Palette::PLAIN).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(" Table of nodes "));
        assert!(text.contains(" Visual representation "));
        assert!(text.contains("(2, 2)"));
        assert_eq!(text.lines().filter(|l| l.contains('O')).count(), 3);
    }
}
