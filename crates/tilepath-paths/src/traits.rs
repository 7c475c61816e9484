use tilepath_core::{Grid, Point, Range};

/// Walkability interface consumed by the search.
pub trait Passable {
    /// The rectangle searched. Linear node indices are taken relative to it.
    fn range(&self) -> Range;

    /// Whether `p` can be stepped on. Must return `false` for points outside
    /// [`Passable::range`].
    fn passable(&self, p: Point) -> bool;
}

impl Passable for Grid {
    #[inline]
    fn range(&self) -> Range {
        Grid::range(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.walkable(p)
    }
}

impl<T: Passable + ?Sized> Passable for &T {
    #[inline]
    fn range(&self) -> Range {
        (**self).range()
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        (**self).passable(p)
    }
}
