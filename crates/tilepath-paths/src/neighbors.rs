use tilepath_core::Point;

use crate::traits::Passable;

/// Which diagonal moves a search may take on top of the cardinal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Diagonals {
    /// Cardinal moves only (north, east, south, west).
    #[default]
    None,
    /// Diagonal moves only when both cardinal tiles flanking the move are
    /// walkable, so routes never cut a corner.
    Strict,
    /// Diagonal moves whenever the target tile is walkable, even through a
    /// one-tile gap between two blocked tiles.
    Free,
}

impl Diagonals {
    /// Every variant, in declaration order.
    pub const ALL: [Diagonals; 3] = [Self::None, Self::Strict, Self::Free];

    /// Whether `a` and `b` are one move apart under this policy, ignoring
    /// walkability.
    pub fn is_adjacent(self, a: Point, b: Point) -> bool {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        match self {
            Self::None => dx + dy == 1,
            Self::Strict | Self::Free => dx.max(dy) == 1,
        }
    }
}

/// Reusable neighbour buffer.
///
/// Enumerates the walkable tiles adjacent to a point. Output order is fixed
/// and drives tie-breaking in the search:
///
/// - cardinal tiles first: N, E, S, W;
/// - [`Diagonals::Strict`] then appends NE, NW (only if N is walkable) and
///   SE, SW (only if S is walkable), each also requiring its other flanking
///   cardinal tile;
/// - [`Diagonals::Free`] appends NE, SE, NW, SW.
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

    /// Walkable neighbours of `p` under `diagonals`.
    pub fn expand<P: Passable + ?Sized>(
        &mut self,
        grid: &P,
        p: Point,
        diagonals: Diagonals,
    ) -> &[Point] {
        self.buf.clear();
        let [n, e, s, w] = p.neighbors_4();
        let my_n = grid.passable(n);
        let my_e = grid.passable(e);
        let my_s = grid.passable(s);
        let my_w = grid.passable(w);
        for (q, ok) in [(n, my_n), (e, my_e), (s, my_s), (w, my_w)] {
            if ok {
                self.buf.push(q);
            }
        }

        let ne = Point::new(e.x, n.y);
        let nw = Point::new(w.x, n.y);
        let se = Point::new(e.x, s.y);
        let sw = Point::new(w.x, s.y);
        match diagonals {
            Diagonals::None => {}
            Diagonals::Strict => {
                if my_n {
                    self.push_if(my_e && grid.passable(ne), ne);
                    self.push_if(my_w && grid.passable(nw), nw);
                }
                if my_s {
                    self.push_if(my_e && grid.passable(se), se);
                    self.push_if(my_w && grid.passable(sw), sw);
                }
            }
            Diagonals::Free => {
                for q in [ne, se, nw, sw] {
                    self.push_if(grid.passable(q), q);
                }
            }
        }
        &self.buf
    }

    #[inline]
    fn push_if(&mut self, keep: bool, p: Point) {
        if keep {
            self.buf.push(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::Grid;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn cardinal_order() {
        let g = Grid::new(3, 3, 0).unwrap();
        let mut nb = Neighbors::new();
        let got = nb.expand(&g, Point::new(1, 1), Diagonals::None);
        assert_eq!(got, pts(&[(1, 0), (2, 1), (1, 2), (0, 1)]));
    }

    #[test]
    fn cardinal_skips_edges_and_walls() {
        let g = Grid::from_rows(&[vec![0, 1], vec![0, 0]], 0).unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.expand(&g, Point::new(0, 0), Diagonals::None),
            pts(&[(0, 1)])
        );
    }

    #[test]
    fn strict_order_on_open_grid() {
        let g = Grid::new(3, 3, 0).unwrap();
        let mut nb = Neighbors::new();
        let got = nb.expand(&g, Point::new(1, 1), Diagonals::Strict);
        assert_eq!(
            got,
            pts(&[
                (1, 0),
                (2, 1),
                (1, 2),
                (0, 1),
                (2, 0),
                (0, 0),
                (2, 2),
                (0, 2),
            ])
        );
    }

    #[test]
    fn free_order_on_open_grid() {
        let g = Grid::new(3, 3, 0).unwrap();
        let mut nb = Neighbors::new();
        let got = nb.expand(&g, Point::new(1, 1), Diagonals::Free);
        assert_eq!(
            &got[4..],
            pts(&[(2, 0), (2, 2), (0, 0), (0, 2)]).as_slice()
        );
    }

    #[test]
    fn strict_refuses_corner_cut() {
        // .#
        // #.
        let g = Grid::from_rows(&[vec![0, 1], vec![1, 0]], 0).unwrap();
        let mut nb = Neighbors::new();
        assert!(nb.expand(&g, Point::new(0, 0), Diagonals::Strict).is_empty());
        assert_eq!(
            nb.expand(&g, Point::new(0, 0), Diagonals::Free),
            pts(&[(1, 1)])
        );
    }

    #[test]
    fn strict_needs_both_flanks() {
        // ..
        // #.
        let g = Grid::from_rows(&[vec![0, 0], vec![1, 0]], 0).unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.expand(&g, Point::new(0, 0), Diagonals::Strict),
            pts(&[(1, 0)])
        );
    }

    #[test]
    fn blocked_diagonal_target_is_skipped() {
        let g = Grid::from_rows(&[vec![0, 0], vec![0, 1]], 0).unwrap();
        let mut nb = Neighbors::new();
        for d in Diagonals::ALL {
            assert!(!nb.expand(&g, Point::new(0, 0), d).contains(&Point::new(1, 1)));
        }
    }

    #[test]
    fn adjacency() {
        let a = Point::new(2, 2);
        assert!(Diagonals::None.is_adjacent(a, Point::new(2, 3)));
        assert!(!Diagonals::None.is_adjacent(a, Point::new(3, 3)));
        assert!(Diagonals::Strict.is_adjacent(a, Point::new(3, 3)));
        assert!(Diagonals::Free.is_adjacent(a, Point::new(1, 2)));
        assert!(!Diagonals::Free.is_adjacent(a, a));
        assert!(!Diagonals::Free.is_adjacent(a, Point::new(4, 2)));
    }
}
