use tilepath_core::Point;

/// Result of a search: the tiles from start to goal, both inclusive.
///
/// An empty route means the goal cannot be reached.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub points: Vec<Point>,
    /// Accumulated step cost of the goal node, in heuristic units.
    pub cost: f64,
    /// Number of nodes expanded before the search ended.
    pub expanded: usize,
}

impl Route {
    pub(crate) fn unreachable(expanded: usize) -> Self {
        Self {
            points: Vec::new(),
            cost: 0.0,
            expanded,
        }
    }

    /// Number of tiles in the route (moves + 1), 0 if unreachable.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consecutive `(from, to)` moves along the route.
    pub fn steps(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let r = Route {
            points: vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)],
            cost: 2.0,
            expanded: 3,
        };
        assert_eq!(r.len(), 3);
        assert_eq!(r.start(), Some(Point::new(0, 0)));
        assert_eq!(r.goal(), Some(Point::new(1, 1)));
        let steps: Vec<_> = r.steps().collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1], (Point::new(1, 0), Point::new(1, 1)));
    }

    #[test]
    fn unreachable_is_empty() {
        let r = Route::unreachable(7);
        assert!(r.is_empty());
        assert_eq!(r.start(), None);
        assert_eq!(r.steps().count(), 0);
        assert_eq!(r.expanded, 7);
    }
}
