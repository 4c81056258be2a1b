//! Tilepyramid - slippy-map tile pyramid enumeration
//!
//! This library computes, for a zoom-level range and an optional
//! geographic bounding box, the complete set of Web Mercator tile
//! coordinates (z, x, y) whose footprint overlaps that box. It answers
//! "which tiles must be produced or fetched to cover this area?" without
//! rendering, storing, or fetching anything itself.
//!
//! # Example
//!
//! ```
//! use tilepyramid::{GeoBounds, PyramidConfig, Strategy, TilePyramid};
//!
//! let bounds: GeoBounds = "-10,-10,10,10".parse()?;
//! let config = PyramidConfig::new(1, 3, bounds)?;
//! let engine = TilePyramid::with_strategy(config, Strategy::Parallel);
//!
//! let pyramid = engine.generate();
//! assert_eq!(pyramid[&1].len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Scheme
//!
//! Only the standard 256-pixel spherical Web Mercator slippy-map scheme
//! is supported: zoom level `z` divides the world into `2^z x 2^z` tiles
//! indexed from the top-left. There is no TMS y-flip variant, custom
//! tile size, or ellipsoidal correction.

pub mod bounds;
pub(crate) mod mercator;
pub mod pyramid;
pub mod tile;

pub use bounds::{BoundsError, GeoBounds};
pub use pyramid::{
    enumerate_zoom, ConfigError, PyramidConfig, Strategy, TilePyramid, MAX_ZOOM, MIN_ZOOM,
};
pub use tile::{TileCoord, TileError};
