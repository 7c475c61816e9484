use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilepath_core::{Error, Point};

use crate::config::SearchConfig;
use crate::neighbors::Neighbors;
use crate::route::Route;
use crate::traits::Passable;

/// Parent index of the root node.
const ROOT: usize = usize::MAX;

/// One tile as discovered by a single search. Nodes live in an arena and
/// point at their parent by index; the parent always has a smaller index.
#[derive(Clone, Copy)]
struct SearchNode {
    pos: Point,
    parent: usize,
    g: f64,
}

/// Open-list entry, ordered so that `BinaryHeap` pops the smallest `f`,
/// and among equal `f` the node discovered first.
#[derive(Clone, Copy)]
struct OpenRef {
    node: usize,
    f: f64,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenRef {}

/// Find a route from `start` to `goal` with best-first (A*) search.
///
/// Returns an empty [`Route`] when the goal is unreachable. Fails with
/// [`Error::CoordinateOutOfBounds`] if either endpoint lies outside the grid,
/// and with [`Error::ExpansionLimit`] when `config.max_expansions` runs out.
///
/// A tile is marked as visited the first time it is discovered and is never
/// re-opened, even if a cheaper way to it turns up later. The start tile
/// itself is never checked for walkability.
pub fn find_path<P: Passable + ?Sized>(
    grid: &P,
    start: Point,
    goal: Point,
    config: &SearchConfig,
) -> Result<Route, Error> {
    let rng = grid.range();
    let start_idx = rng.index_of(start).ok_or(Error::CoordinateOutOfBounds {
        point: start,
        bounds: rng,
    })?;
    if !rng.contains(goal) {
        return Err(Error::CoordinateOutOfBounds {
            point: goal,
            bounds: rng,
        });
    }

    let h = config.heuristic;
    let mut nodes = vec![SearchNode {
        pos: start,
        parent: ROOT,
        g: 0.0,
    }];
    let mut visited = vec![false; rng.len()];
    visited[start_idx] = true;
    let mut open = BinaryHeap::new();
    open.push(OpenRef {
        node: 0,
        f: h.distance(start, goal),
    });

    let mut nbuf = Neighbors::new();
    let mut expanded = 0;

    while let Some(OpenRef { node: ci, .. }) = open.pop() {
        let current = nodes[ci];
        if current.pos == goal {
            let route = Route {
                points: backtrack(&nodes, ci),
                cost: current.g,
                expanded,
            };
            log::debug!(
                "route {} -> {}: {} tiles, cost {:.3}, {} expanded",
                start,
                goal,
                route.len(),
                route.cost,
                expanded
            );
            return Ok(route);
        }

        if let Some(limit) = config.max_expansions {
            if expanded >= limit {
                log::debug!("route {} -> {}: expansion limit {} hit", start, goal, limit);
                return Err(Error::ExpansionLimit { limit });
            }
        }
        expanded += 1;
        log::trace!("expand {} g={:.3}", current.pos, current.g);

        for &np in nbuf.expand(grid, current.pos, config.diagonals) {
            let Some(ni) = rng.index_of(np) else {
                continue;
            };
            if visited[ni] {
                continue;
            }
            visited[ni] = true;

            let g = current.g + h.distance(np, current.pos);
            let f = g + h.distance(np, goal);
            open.push(OpenRef {
                node: nodes.len(),
                f,
            });
            nodes.push(SearchNode {
                pos: np,
                parent: ci,
                g,
            });
        }
    }

    log::debug!(
        "route {} -> {}: unreachable, {} expanded",
        start,
        goal,
        expanded
    );
    Ok(Route::unreachable(expanded))
}

fn backtrack(nodes: &[SearchNode], mut ci: usize) -> Vec<Point> {
    let mut path = Vec::new();
    while ci != ROOT {
        path.push(nodes[ci].pos);
        ci = nodes[ci].parent;
    }
    path.reverse();
    path
}

impl SearchConfig {
    /// Shorthand for [`find_path`] with this configuration.
    pub fn find_path<P: Passable + ?Sized>(
        &self,
        grid: &P,
        start: Point,
        goal: Point,
    ) -> Result<Route, Error> {
        find_path(grid, start, goal, self)
    }
}
