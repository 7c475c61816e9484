use tilepath_core::Error;

/// Parameters for a randomly scattered world.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Width in tiles.
    pub width: i32,
    /// Height in tiles.
    pub height: i32,
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Probability that a tile becomes a wall, in `[0, 1]`.
    pub wall_density: f64,
    /// Terrain code written for walls. Must exceed `max_walkable`.
    pub wall_code: u32,
    /// Highest walkable terrain code.
    pub max_walkable: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            tile_width: 32,
            tile_height: 32,
            wall_density: 0.25,
            wall_code: 1,
            max_walkable: 0,
        }
    }
}

impl WorldConfig {
    /// Check the configuration before building anything from it.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidGridDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "tile size {}x{} must be positive",
                self.tile_width, self.tile_height
            )));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(Error::InvalidConfig(format!(
                "wall density {} outside [0, 1]",
                self.wall_density
            )));
        }
        if self.wall_code <= self.max_walkable {
            return Err(Error::InvalidConfig(format!(
                "wall code {} is walkable (max walkable {})",
                self.wall_code, self.max_walkable
            )));
        }
        Ok(())
    }
}
