//! Shared pieces of the tilepath demo: strategy pairings and ASCII rendering.

use tilepath_core::{Grid, Point};
use tilepath_paths::{Diagonals, Heuristic, Route, SearchConfig};

/// The heuristic/diagonal pairings that give sensible routes, with labels.
pub const PAIRINGS: [(&str, Heuristic, Diagonals); 5] = [
    ("manhattan, no diagonals", Heuristic::Manhattan, Diagonals::None),
    ("diagonal, no squeezing", Heuristic::Diagonal, Diagonals::Strict),
    ("diagonal, squeezing", Heuristic::Diagonal, Diagonals::Free),
    ("euclidean, no squeezing", Heuristic::Euclidean, Diagonals::Strict),
    ("euclidean, squeezing", Heuristic::Euclidean, Diagonals::Free),
];

/// Search configuration for one entry of [`PAIRINGS`].
pub fn pairing_config(heuristic: Heuristic, diagonals: Diagonals) -> SearchConfig {
    SearchConfig::cardinal()
        .with_heuristic(heuristic)
        .with_diagonals(diagonals)
}

/// Draw the grid one character per tile: `#` blocked, `.` walkable, `*` on
/// the route, `S` and `G` for its ends.
pub fn render_ascii(grid: &Grid, route: &Route) -> String {
    let mut rows: Vec<Vec<char>> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    if grid.walkable(Point::new(x, y)) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect()
        })
        .collect();
    let mut mark = |p: Point, ch: char| {
        if let Some(row) = rows.get_mut(p.y as usize) {
            if let Some(c) = row.get_mut(p.x as usize) {
                *c = ch;
            }
        }
    };
    for &p in route {
        mark(p, '*');
    }
    if let Some(p) = route.start() {
        mark(p, 'S');
    }
    if let Some(p) = route.goal() {
        mark(p, 'G');
    }
    let mut out = String::with_capacity(rows.len() * (grid.width() as usize + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_paths::find_path;

    #[test]
    fn renders_route_over_terrain() {
        let g = Grid::from_rows(&[vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]], 0).unwrap();
        let cfg = pairing_config(Heuristic::Manhattan, Diagonals::None);
        let r = find_path(&g, Point::new(0, 0), Point::new(0, 2), &cfg).unwrap();
        assert_eq!(render_ascii(&g, &r), "S**\n##*\nG**\n");
    }

    #[test]
    fn renders_plain_grid_without_route() {
        let g = Grid::from_rows(&[vec![0, 1]], 0).unwrap();
        assert_eq!(render_ascii(&g, &Route::default()), ".#\n");
    }

    #[test]
    fn every_pairing_finds_open_route() {
        let g = Grid::new(5, 5, 0).unwrap();
        for (label, h, d) in PAIRINGS {
            let r = find_path(&g, Point::new(0, 0), Point::new(4, 4), &pairing_config(h, d))
                .unwrap();
            assert!(!r.is_empty(), "{label}");
        }
    }
}
