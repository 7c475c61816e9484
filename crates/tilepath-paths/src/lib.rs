//! Best-first (A*) route search on tile grids.
//!
//! A search is a single call to [`find_path`]: it takes anything
//! implementing [`Passable`] (normally a [`tilepath_core::Grid`]), a start
//! and goal tile, and a [`SearchConfig`] selecting
//!
//! - a [`Heuristic`]: `Manhattan`, `Diagonal` (Chebyshev) or `Euclidean`,
//!   used both for step costs and for the remaining-cost estimate;
//! - a [`Diagonals`] policy: cardinal moves only, diagonals without corner
//!   cutting, or diagonals through one-tile gaps.
//!
//! The result is a [`Route`] listing every tile from start to goal, or an
//! empty route when the goal cannot be reached. All search state is local to
//! the call, so independent searches may run in parallel over one shared
//! grid.
//!
//! | Heuristic | Natural [`Diagonals`] pairing |
//! |---|---|
//! | `Manhattan` | `None` |
//! | `Diagonal` | `Strict` or `Free` |
//! | `Euclidean` | `Strict` or `Free` |

mod astar;
mod config;
mod distance;
mod neighbors;
mod route;
mod traits;

pub use astar::find_path;
pub use config::SearchConfig;
pub use distance::{Heuristic, chebyshev, euclidean, manhattan};
pub use neighbors::{Diagonals, Neighbors};
pub use route::Route;
pub use traits::Passable;
