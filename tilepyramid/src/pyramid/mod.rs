//! Tile pyramid enumeration and filtering.
//!
//! [`TilePyramid`] walks a configured zoom range and produces, per zoom
//! level, the tiles whose geographic footprint overlaps the configured
//! bounding box. A full-world box skips filtering entirely, since every
//! tile of every zoom level is covered.
//!
//! # Ordering contract
//!
//! Tiles within a zoom level are emitted in x-major order (x ascending,
//! and y ascending within each x), matching [`enumerate_zoom`]. Both
//! execution strategies preserve this order: the sequential filter walks
//! candidates in order, and the parallel filter writes each verdict into
//! the slot of the candidate that produced it before compacting, so
//! worker completion order never leaks into the result.
//!
//! # Example
//!
//! ```
//! use tilepyramid::{GeoBounds, PyramidConfig, TilePyramid};
//!
//! let bounds = GeoBounds::new(-10.0, -10.0, 10.0, 10.0)?;
//! let config = PyramidConfig::new(1, 2, bounds)?;
//! let pyramid = TilePyramid::new(config).generate();
//!
//! for (zoom, tiles) in &pyramid {
//!     println!("zoom {}: {} tiles", zoom, tiles.len());
//! }
//! # Ok::<(), tilepyramid::ConfigError>(())
//! ```

mod config;

pub use config::{ConfigError, PyramidConfig, MAX_ZOOM, MIN_ZOOM};

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::bounds::GeoBounds;
use crate::tile::TileCoord;

/// Execution strategy for the per-zoom filter pass.
///
/// Both strategies produce element-for-element identical results; the
/// parallel strategy spreads the per-tile overlap test across rayon's
/// worker pool (sized to host CPU parallelism).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Evaluate candidates in order on the calling thread.
    #[default]
    Sequential,
    /// Evaluate candidates on a worker pool, preserving candidate order.
    Parallel,
}

/// All tiles of a zoom level in canonical x-major order.
///
/// Yields `4^z` tiles: x from 0 to `2^z - 1`, and for each x, y from 0
/// to `2^z - 1`. Downstream filtering preserves this order. Supported
/// for zoom levels up to [`MAX_ZOOM`].
pub fn enumerate_zoom(z: u8) -> impl Iterator<Item = TileCoord> {
    let size = 1u32 << z;
    (0..size).flat_map(move |x| (0..size).map(move |y| TileCoord::new(z, x, y)))
}

/// Tile pyramid generation engine.
///
/// Holds an immutable [`PyramidConfig`] and an execution [`Strategy`];
/// no other state is kept between calls to [`generate`](Self::generate).
#[derive(Debug, Clone)]
pub struct TilePyramid {
    config: PyramidConfig,
    strategy: Strategy,
}

impl TilePyramid {
    /// Create an engine with the default sequential strategy.
    pub fn new(config: PyramidConfig) -> Self {
        Self::with_strategy(config, Strategy::default())
    }

    /// Create an engine with an explicit execution strategy.
    pub fn with_strategy(config: PyramidConfig, strategy: Strategy) -> Self {
        Self { config, strategy }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &PyramidConfig {
        &self.config
    }

    /// Upper bound on the number of candidate tiles across the zoom
    /// range, before any filtering. Useful for progress estimation.
    pub fn total_candidates(&self) -> u64 {
        (self.config.min_zoom..=self.config.max_zoom)
            .map(|z| 1u64 << (2 * z))
            .sum()
    }

    /// Generate the pyramid: an ordered mapping from zoom level to the
    /// tiles overlapping the configured bounds at that level.
    ///
    /// Zoom levels run ascending from `min_zoom` to `max_zoom`; tiles
    /// within each level follow the canonical enumeration order.
    pub fn generate(&self) -> BTreeMap<u8, Vec<TileCoord>> {
        let mut pyramid = BTreeMap::new();
        let mut total = 0usize;

        for z in self.config.min_zoom..=self.config.max_zoom {
            let tiles = self.zoom_tiles(z);
            debug!(
                zoom = z,
                candidates = 1u64 << (2 * z),
                kept = tiles.len(),
                "Zoom level enumerated"
            );
            total += tiles.len();
            pyramid.insert(z, tiles);
        }

        info!(
            min_zoom = self.config.min_zoom,
            max_zoom = self.config.max_zoom,
            tiles = total,
            "Pyramid generation complete"
        );
        pyramid
    }

    /// Surviving tiles for one zoom level.
    fn zoom_tiles(&self, z: u8) -> Vec<TileCoord> {
        // Full-world bounds cover every tile; skip the filter entirely
        if self.config.bounds.is_world() {
            return enumerate_zoom(z).collect();
        }

        match self.strategy {
            Strategy::Sequential => enumerate_zoom(z)
                .filter(|tile| tile_overlaps(tile, &self.config.bounds))
                .collect(),
            Strategy::Parallel => {
                let candidates: Vec<TileCoord> = enumerate_zoom(z).collect();
                // Each verdict lands in its candidate's slot, so the
                // compacted result keeps enumeration order no matter how
                // the pool schedules the work.
                let verdicts: Vec<Option<TileCoord>> = candidates
                    .par_iter()
                    .map(|tile| tile_overlaps(tile, &self.config.bounds).then_some(*tile))
                    .collect();
                verdicts.into_iter().flatten().collect()
            }
        }
    }
}

/// Whether a tile's geographic footprint overlaps the target bounds.
///
/// Pure function of the tile index and the bounds, safe to evaluate from
/// any worker thread.
fn tile_overlaps(tile: &TileCoord, bounds: &GeoBounds) -> bool {
    let tile_bounds = tile
        .geo_bounds()
        .expect("zoom enumeration yields only valid tiles");
    tile_bounds.intersects(bounds)
}
