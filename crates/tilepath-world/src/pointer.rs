//! Pixel ↔ tile mapping and click-driven route requests.

use tilepath_core::{Error, Grid, Point};
use tilepath_paths::{Route, SearchConfig, find_path};

use crate::config::WorldConfig;

/// Pixel size of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMetrics {
    tile_width: u32,
    tile_height: u32,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self {
            tile_width: 32,
            tile_height: 32,
        }
    }
}

impl TileMetrics {
    /// Tile size in pixels; both sides must be positive.
    pub fn new(tile_width: u32, tile_height: u32) -> Result<Self, Error> {
        if tile_width == 0 || tile_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "tile size {tile_width}x{tile_height} must be positive"
            )));
        }
        Ok(Self {
            tile_width,
            tile_height,
        })
    }

    /// Tile metrics of a world configuration.
    pub fn from_config(config: &WorldConfig) -> Result<Self, Error> {
        Self::new(config.tile_width, config.tile_height)
    }

    pub fn tile_width(self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(self) -> u32 {
        self.tile_height
    }

    /// Tile under a pixel: `floor(px / tile_width)`, `floor(py / tile_height)`.
    /// The result may lie outside any grid.
    pub fn cell_at(self, px: f64, py: f64) -> Point {
        Point::new(
            (px / f64::from(self.tile_width)).floor() as i32,
            (py / f64::from(self.tile_height)).floor() as i32,
        )
    }

    /// Tile under a pixel, or `None` when the pixel is off the grid.
    pub fn cell_in(self, grid: &Grid, px: f64, py: f64) -> Option<Point> {
        let p = self.cell_at(px, py);
        grid.contains(p).then_some(p)
    }

    /// Top-left pixel of a tile.
    pub fn origin_of(self, p: Point) -> (i64, i64) {
        (
            i64::from(p.x) * i64::from(self.tile_width),
            i64::from(p.y) * i64::from(self.tile_height),
        )
    }

    /// Pixel size of a whole grid.
    pub fn world_size_px(self, grid: &Grid) -> (u64, u64) {
        (
            grid.width() as u64 * u64::from(self.tile_width),
            grid.height() as u64 * u64::from(self.tile_height),
        )
    }
}

/// Turns pointer clicks into route requests.
///
/// Each click on a tile routes from the previous click's tile (the last
/// goal) to the clicked one, whether or not the previous route existed.
#[derive(Debug, Clone)]
pub struct ClickRouter {
    metrics: TileMetrics,
    config: SearchConfig,
    goal: Point,
}

impl ClickRouter {
    /// `goal` seeds the first click's start tile.
    pub fn new(metrics: TileMetrics, config: SearchConfig, goal: Point) -> Self {
        Self {
            metrics,
            config,
            goal,
        }
    }

    /// Tile the next route will start from.
    pub fn current(&self) -> Point {
        self.goal
    }

    /// Handle a click at pixel `(px, py)`.
    ///
    /// Clicks off the grid are ignored and return `Ok(None)`. Otherwise the
    /// route from the previous goal to the clicked tile is returned (empty
    /// if unreachable) and the clicked tile becomes the new goal. On error
    /// the goal is left unchanged.
    pub fn click(&mut self, grid: &Grid, px: f64, py: f64) -> Result<Option<Route>, Error> {
        let Some(cell) = self.metrics.cell_in(grid, px, py) else {
            log::debug!("click at ({px}, {py}) is off the grid");
            return Ok(None);
        };
        log::debug!("clicked tile {}", cell);
        let route = find_path(grid, self.goal, cell, &self.config)?;
        self.goal = cell;
        Ok(Some(route))
    }
}
