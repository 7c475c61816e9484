//! World utilities around route search: random terrain, random trips, and
//! mapping pointer clicks in pixel space onto tiles.

pub mod config;
pub mod mapgen;
pub mod pointer;

pub use config::WorldConfig;
pub use mapgen::{Trip, generate, random_trip};
pub use pointer::{ClickRouter, TileMetrics};
