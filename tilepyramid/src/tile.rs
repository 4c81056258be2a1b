//! Tile coordinates and tile geometry.
//!
//! A [`TileCoord`] identifies one tile in the standard slippy-map pyramid:
//! zoom level `z` divides the world into `2^z x 2^z` square tiles, indexed
//! `(x, y)` with the origin at the top-left. Tile row `y` increases
//! downward in pixel space but upward in projected meters, so the bottom
//! pixel row of a tile maps to its geometric minimum corner.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::GeoBounds;
use crate::mercator::{self, ProjectedPoint, TILE_SIZE};

/// Errors produced by tile geometry computations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TileError {
    /// The tile index lies outside the grid at its zoom level.
    #[error("tile {x}/{y} does not exist at zoom {z}")]
    InvalidTile { z: u8, x: u32, y: u32 },
}

/// A tile coordinate in the slippy-map pyramid.
///
/// Valid tiles satisfy `x < 2^z` and `y < 2^z`. Out-of-range coordinates
/// are representable so callers can filter them cheaply with
/// [`TileCoord::is_valid`] before computing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Zoom level.
    pub z: u8,
    /// Column, increasing eastward from the antimeridian.
    pub x: u32,
    /// Row, increasing southward from the north edge.
    pub y: u32,
}

impl TileCoord {
    /// Create a new tile coordinate.
    pub fn new(z: u8, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Whether this tile exists in the grid at its zoom level.
    pub fn is_valid(&self) -> bool {
        // saturating_pow keeps this total for zoom levels whose grid
        // exceeds u32 indices (every index is then in range)
        let size = 2u64.saturating_pow(self.z as u32);
        (self.x as u64) < size && (self.y as u64) < size
    }

    /// Projected bounds of this tile as (min, max) corners in meters.
    ///
    /// The min corner comes from the tile's bottom-left pixel, the max
    /// corner from its top-right pixel (row direction flips between pixel
    /// and projected space).
    pub(crate) fn mercator_bounds(&self) -> Result<(ProjectedPoint, ProjectedPoint), TileError> {
        if !self.is_valid() {
            return Err(TileError::InvalidTile {
                z: self.z,
                x: self.x,
                y: self.y,
            });
        }
        let min = mercator::pixels_to_meters(
            self.z,
            self.x as f64 * TILE_SIZE,
            (self.y as f64 + 1.0) * TILE_SIZE,
        );
        let max = mercator::pixels_to_meters(
            self.z,
            (self.x as f64 + 1.0) * TILE_SIZE,
            self.y as f64 * TILE_SIZE,
        );
        Ok((min, max))
    }

    /// Geographic bounding box of this tile in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidTile`] if the tile index is out of
    /// range for its zoom level.
    pub fn geo_bounds(&self) -> Result<GeoBounds, TileError> {
        let (min, max) = self.mercator_bounds()?;
        let (min_x, min_y) = mercator::meters_to_lng_lat(min);
        let (max_x, max_y) = mercator::meters_to_lng_lat(max);
        Ok(GeoBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
