use wayfind_core::{Grid, Point, Range};

/// Grid adapter consulted by the search for legal moves.
pub trait Pather {
    /// The rectangle of valid coordinates.
    fn bounds(&self) -> Range;

    /// Whether `p` can be entered. Only called for points inside
    /// [`bounds`](Pather::bounds).
    fn passable(&self, p: Point) -> bool;

    /// In bounds and passable.
    #[inline]
    fn is_traversable(&self, p: Point) -> bool {
        self.bounds().contains(p) && self.passable(p)
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_open(p)
    }
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        (**self).passable(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_adapter() {
        let grid = Grid::parse(".#\n..\n").unwrap();
        assert_eq!(Pather::bounds(&grid), Range::new(0, 0, 2, 2));
        assert!(grid.is_traversable(Point::new(0, 0)));
        assert!(!grid.is_traversable(Point::new(1, 0)));
        assert!(!grid.is_traversable(Point::new(2, 0)));
        // Through a reference, as the search engine borrows grids.
        assert!((&grid).is_traversable(Point::new(1, 1)));
    }
}
