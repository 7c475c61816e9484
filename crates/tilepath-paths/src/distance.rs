use tilepath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Distance estimate used both for step costs and for the remaining-cost
/// guess of a search.
///
/// Pair it with a consistent [`Diagonals`](crate::Diagonals) policy:
/// `Manhattan` with cardinal-only movement, `Diagonal` or `Euclidean` with
/// either diagonal policy. Mismatched pairs are accepted but may yield longer
/// routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// `|dx| + |dy|`.
    #[default]
    Manhattan,
    /// `max(|dx|, |dy|)`: a diagonal step costs the same as a cardinal one.
    Diagonal,
    /// `sqrt(dx² + dy²)`.
    Euclidean,
}

impl Heuristic {
    /// Every variant, in declaration order.
    pub const ALL: [Heuristic; 3] = [Self::Manhattan, Self::Diagonal, Self::Euclidean];

    /// Distance between `a` and `b` under this metric. Never negative.
    #[inline]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Manhattan => f64::from(manhattan(a, b)),
            Self::Diagonal => f64::from(chebyshev(a, b)),
            Self::Euclidean => euclidean(a, b),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn heuristic_names() {
        assert_eq!(
            serde_json::to_string(&Heuristic::Euclidean).unwrap(),
            "\"euclidean\""
        );
        let h: Heuristic = serde_json::from_str("\"diagonal\"").unwrap();
        assert_eq!(h, Heuristic::Diagonal);
    }
}
