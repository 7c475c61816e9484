use crate::distance::Heuristic;
use crate::neighbors::Diagonals;

/// Strategy selection and limits for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Metric for step costs and remaining-cost estimates.
    pub heuristic: Heuristic,
    /// Diagonal movement policy.
    pub diagonals: Diagonals,
    /// Give up with [`Error::ExpansionLimit`](tilepath_core::Error::ExpansionLimit)
    /// after expanding this many nodes. `None` searches until the frontier
    /// is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Cardinal moves with the Manhattan metric.
    pub const fn cardinal() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            diagonals: Diagonals::None,
            max_expansions: None,
        }
    }

    /// Diagonal moves without corner cutting, Chebyshev metric.
    pub const fn diagonal() -> Self {
        Self {
            heuristic: Heuristic::Diagonal,
            diagonals: Diagonals::Strict,
            max_expansions: None,
        }
    }

    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub const fn with_diagonals(mut self, diagonals: Diagonals) -> Self {
        self.diagonals = diagonals;
        self
    }

    pub const fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}
