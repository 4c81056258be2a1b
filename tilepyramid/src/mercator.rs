//! Spherical Web Mercator projection math.
//!
//! Provides the pixel-to-meter and meter-to-degree conversions underlying
//! the slippy-map tiling scheme (EPSG:3857, 256-pixel tiles). All functions
//! here are pure arithmetic with no failure paths; callers are responsible
//! for feeding pixel coordinates that come from valid tile indices.

use std::f64::consts::PI;

/// Mean Earth radius in meters, the fixed constant of the spherical
/// Web Mercator projection.
pub(crate) const EARTH_RADIUS_M: f64 = 6378137.0;

/// Width and height of a tile in pixels.
pub(crate) const TILE_SIZE: f64 = 256.0;

/// Half the projected world width in meters. The projected world spans
/// `[-ORIGIN_SHIFT, ORIGIN_SHIFT]` on both axes.
pub(crate) const ORIGIN_SHIFT: f64 = PI * EARTH_RADIUS_M;

/// A point in projected Web Mercator meters.
///
/// Intermediate representation between tile pixel space and geographic
/// degrees. Stays internal to the projection and tile-geometry layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProjectedPoint {
    /// Easting in meters.
    pub x: f64,
    /// Northing in meters.
    pub y: f64,
}

/// Ground resolution in meters per pixel at the given zoom level.
pub(crate) fn resolution(zoom: u8) -> f64 {
    (2.0 * ORIGIN_SHIFT / TILE_SIZE) / 2.0_f64.powi(zoom as i32)
}

/// Convert pixel coordinates at a zoom level to projected meters.
///
/// Pixel space has its origin at the top-left of the world, y growing
/// downward; projected space is y-up, hence the sign flip on y.
pub(crate) fn pixels_to_meters(zoom: u8, px: f64, py: f64) -> ProjectedPoint {
    let res = resolution(zoom);
    ProjectedPoint {
        x: px * res - ORIGIN_SHIFT,
        y: -(py * res - ORIGIN_SHIFT),
    }
}

/// Convert projected meters to geographic longitude/latitude in degrees.
///
/// Latitude uses the Gudermannian-based inverse Mercator formula. Total
/// for any input; meters produced by valid tile geometry always land in
/// the Web Mercator latitude range (±85.05112878°).
pub(crate) fn meters_to_lng_lat(point: ProjectedPoint) -> (f64, f64) {
    let lng = (point.x / ORIGIN_SHIFT) * 180.0;

    let lat = (point.y / ORIGIN_SHIFT) * 180.0;
    let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);

    (lng, lat)
}
