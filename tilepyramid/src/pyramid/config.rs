//! Pyramid generation configuration and validation.

use thiserror::Error;

use crate::bounds::{BoundsError, GeoBounds};

/// Lowest zoom level a pyramid may start at.
pub const MIN_ZOOM: u8 = 1;

/// Highest zoom level a pyramid may end at.
pub const MAX_ZOOM: u8 = 20;

/// Errors raised while validating a [`PyramidConfig`].
///
/// Construction is atomic: the first violated rule is reported and no
/// partially validated config exists.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// `min_zoom` lies outside the supported zoom range.
    #[error("min zoom {zoom} must be between {MIN_ZOOM} and {MAX_ZOOM}")]
    MinZoomOutOfRange { zoom: u8 },

    /// `max_zoom` lies outside the supported zoom range.
    #[error("max zoom {zoom} must be between {MIN_ZOOM} and {MAX_ZOOM}")]
    MaxZoomOutOfRange { zoom: u8 },

    /// The zoom range is inverted.
    #[error("min zoom {min} must be less than or equal to max zoom {max}")]
    ZoomRangeInverted { min: u8, max: u8 },

    /// The target bounding box failed validation.
    #[error("invalid bounds: {0}")]
    Bounds(#[from] BoundsError),
}

/// Validated configuration for pyramid generation.
///
/// Owned by the [`TilePyramid`](super::TilePyramid) engine and immutable
/// after construction; every generation run reads the same zoom range and
/// target bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidConfig {
    pub(super) min_zoom: u8,
    pub(super) max_zoom: u8,
    pub(super) bounds: GeoBounds,
}

impl PyramidConfig {
    /// Create a validated configuration.
    ///
    /// Zoom rules are checked in order: `min_zoom` range, `max_zoom`
    /// range, then `min_zoom <= max_zoom`. The bounds carry their own
    /// invariants from [`GeoBounds::new`].
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first violated rule.
    pub fn new(min_zoom: u8, max_zoom: u8, bounds: GeoBounds) -> Result<Self, ConfigError> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&min_zoom) {
            return Err(ConfigError::MinZoomOutOfRange { zoom: min_zoom });
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&max_zoom) {
            return Err(ConfigError::MaxZoomOutOfRange { zoom: max_zoom });
        }
        if min_zoom > max_zoom {
            return Err(ConfigError::ZoomRangeInverted {
                min: min_zoom,
                max: max_zoom,
            });
        }
        Ok(Self {
            min_zoom,
            max_zoom,
            bounds,
        })
    }

    /// Create a configuration covering the full world extent.
    pub fn with_world_bounds(min_zoom: u8, max_zoom: u8) -> Result<Self, ConfigError> {
        Self::new(min_zoom, max_zoom, GeoBounds::WORLD)
    }

    /// The first zoom level generated.
    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    /// The last zoom level generated.
    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    /// The target bounding box tiles are filtered against.
    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_zoom_range() {
        let config = PyramidConfig::with_world_bounds(MIN_ZOOM, MAX_ZOOM).unwrap();
        assert_eq!(config.min_zoom(), 1);
        assert_eq!(config.max_zoom(), 20);
        assert!(config.bounds().is_world());
    }

    #[test]
    fn test_new_rejects_min_zoom_out_of_range() {
        assert_eq!(
            PyramidConfig::with_world_bounds(0, 5).unwrap_err(),
            ConfigError::MinZoomOutOfRange { zoom: 0 }
        );
        assert_eq!(
            PyramidConfig::with_world_bounds(21, 21).unwrap_err(),
            ConfigError::MinZoomOutOfRange { zoom: 21 }
        );
    }

    #[test]
    fn test_new_rejects_max_zoom_out_of_range() {
        assert_eq!(
            PyramidConfig::with_world_bounds(1, 0).unwrap_err(),
            ConfigError::MaxZoomOutOfRange { zoom: 0 }
        );
        assert_eq!(
            PyramidConfig::with_world_bounds(1, 21).unwrap_err(),
            ConfigError::MaxZoomOutOfRange { zoom: 21 }
        );
    }

    #[test]
    fn test_new_rejects_inverted_zoom_range() {
        assert_eq!(
            PyramidConfig::with_world_bounds(5, 3).unwrap_err(),
            ConfigError::ZoomRangeInverted { min: 5, max: 3 }
        );
    }

    #[test]
    fn test_min_zoom_checked_before_max_zoom() {
        // Both zooms are invalid; min_zoom is reported first
        assert_eq!(
            PyramidConfig::with_world_bounds(0, 21).unwrap_err(),
            ConfigError::MinZoomOutOfRange { zoom: 0 }
        );
    }

    #[test]
    fn test_bounds_error_converts() {
        let err = GeoBounds::new(10.0, -90.0, -10.0, 90.0).unwrap_err();
        let config_err: ConfigError = err.into();
        assert!(matches!(config_err, ConfigError::Bounds(_)));
    }
}
