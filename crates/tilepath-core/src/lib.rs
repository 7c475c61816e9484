//! **tilepath-core** — core types for tile-grid pathfinding.
//!
//! This crate provides the foundational types shared by the *tilepath*
//! crates: geometry primitives, the immutable terrain grid with its
//! walkability threshold, and the error type for malformed input.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::Error;
pub use geom::{Point, Range};
pub use grid::{Grid, Terrain};
