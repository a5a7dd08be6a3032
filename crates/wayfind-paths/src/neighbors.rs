use wayfind_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the eight cells around a point, rows top to bottom and
/// columns left to right within each row, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, mut keep: impl FnMut(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if keep(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_enumerates_row_by_row() {
        let mut nb = Neighbors::new();
        let got = nb.all(Point::new(1, 1), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn all_applies_filter() {
        let mut nb = Neighbors::new();
        let got = nb.all(Point::ZERO, |n| n.x >= 0 && n.y >= 0);
        assert_eq!(got, &[Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
    }
}
