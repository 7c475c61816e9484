//! A fixed-size terrain grid with a walkability threshold.
//!
//! [`Terrain`] is a newtype over `u32`: every tile carries a non-negative
//! terrain code and a tile is walkable iff its code is at most the grid's
//! `max_walkable` threshold. Several codes can therefore be walkable at once
//! (road, grass, mud) while anything above the threshold blocks movement.

use crate::error::Error;
use crate::geom::{Point, Range};

/// A terrain code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain(pub u32);

impl Terrain {
    /// Create a new terrain code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Get the underlying code.
    pub const fn code(self) -> u32 {
        self.0
    }
}

impl From<u32> for Terrain {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Terrain> for u32 {
    fn from(t: Terrain) -> Self {
        t.0
    }
}

/// A rectangular grid of [`Terrain`] codes stored row-major
/// (`index = x + y * width`).
///
/// Searches only ever borrow a `Grid` immutably, so it can be shared between
/// threads running independent searches. Mutation needs `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<Terrain>,
    bounds: Range,
    max_walkable: Terrain,
}

/// Unchecked wire form of a [`Grid`]; converted with the same validation as
/// [`Grid::from_codes`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Terrain>,
    bounds: Range,
    max_walkable: Terrain,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = Error;

    fn try_from(repr: GridRepr) -> Result<Self, Error> {
        let GridRepr {
            cells,
            bounds,
            max_walkable,
        } = repr;
        if bounds.min != Point::ZERO {
            return Err(Error::InvalidGridDimensions {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        Self::from_codes(
            bounds.width(),
            bounds.height(),
            cells.into_iter().map(Terrain::code).collect(),
            max_walkable.code(),
        )
    }
}

impl Grid {
    /// Create a `width × height` grid filled with `Terrain(0)`.
    pub fn new(width: i32, height: i32, max_walkable: u32) -> Result<Self, Error> {
        check_dimensions(width, height)?;
        Ok(Self {
            cells: vec![Terrain::default(); (width as usize) * (height as usize)],
            bounds: Range::sized(width, height),
            max_walkable: Terrain(max_walkable),
        })
    }

    /// Create a grid from row-major terrain codes.
    pub fn from_codes(
        width: i32,
        height: i32,
        codes: Vec<u32>,
        max_walkable: u32,
    ) -> Result<Self, Error> {
        check_dimensions(width, height)?;
        let expected = (width as usize) * (height as usize);
        if codes.len() != expected {
            return Err(Error::CellCountMismatch {
                expected,
                found: codes.len(),
            });
        }
        Ok(Self {
            cells: codes.into_iter().map(Terrain).collect(),
            bounds: Range::sized(width, height),
            max_walkable: Terrain(max_walkable),
        })
    }

    /// Create a grid from rows of codes, `rows[y][x]`.
    pub fn from_rows(rows: &[Vec<u32>], max_walkable: u32) -> Result<Self, Error> {
        let (width, height) = rect_dimensions(rows)?;
        let codes = rows.iter().flatten().copied().collect();
        Self::from_codes(width, height, codes, max_walkable)
    }

    /// Create a grid from columns of codes, `columns[x][y]`.
    pub fn from_columns(columns: &[Vec<u32>], max_walkable: u32) -> Result<Self, Error> {
        let (height, width) = rect_dimensions(columns)?;
        let mut grid = Self::new(width, height, max_walkable)?;
        for (x, column) in columns.iter().enumerate() {
            for (y, &code) in column.iter().enumerate() {
                let idx = x + y * width as usize;
                grid.cells[idx] = Terrain(code);
            }
        }
        Ok(grid)
    }

    /// The bounding range, always anchored at (0, 0).
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Width in tiles.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in tiles.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Highest terrain code that still counts as walkable.
    pub fn max_walkable(&self) -> Terrain {
        self.max_walkable
    }

    /// Change the walkability threshold.
    pub fn set_max_walkable(&mut self, max_walkable: u32) {
        self.max_walkable = Terrain(max_walkable);
    }

    /// Get the terrain at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and its code is at most `max_walkable`.
    /// Out-of-range points are simply not walkable.
    pub fn walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|t| t <= self.max_walkable)
    }

    /// Set the terrain at a point.
    pub fn set(&mut self, p: Point, terrain: Terrain) -> Result<(), Error> {
        let idx = self.bounds.index_of(p).ok_or(Error::CoordinateOutOfBounds {
            point: p,
            bounds: self.bounds,
        })?;
        self.cells[idx] = terrain;
        Ok(())
    }

    /// Fill the whole grid with one terrain code.
    pub fn fill(&mut self, terrain: Terrain) {
        self.cells.fill(terrain);
    }

    /// Set every tile from a function of its position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Terrain) {
        for (i, p) in self.bounds.iter().enumerate() {
            self.cells[i] = f(p);
        }
    }

    /// Number of walkable tiles.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|&&t| t <= self.max_walkable).count()
    }

    /// Iterate over `(Point, Terrain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

fn check_dimensions(width: i32, height: i32) -> Result<(), Error> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidGridDimensions { width, height });
    }
    Ok(())
}

/// Inner and outer lengths of a nested vector, rejecting ragged input.
fn rect_dimensions(lines: &[Vec<u32>]) -> Result<(i32, i32), Error> {
    let inner = lines.first().map_or(0, Vec::len);
    if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != inner) {
        return Err(Error::RaggedRow {
            row,
            expected: inner,
            found: line.len(),
        });
    }
    let outer = i32::try_from(lines.len()).unwrap_or(i32::MAX);
    let inner = i32::try_from(inner).unwrap_or(i32::MAX);
    check_dimensions(inner, outer)?;
    Ok((inner, outer))
}
