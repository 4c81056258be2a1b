//! Geographic bounding boxes and the overlap predicate.
//!
//! [`GeoBounds`] is an axis-aligned box in geographic degrees. The overlap
//! test used for tile filtering expresses both boxes as closed rectangular
//! rings and delegates to the `geo` crate's polygon intersection, which is
//! boundary-inclusive: boxes that merely touch at an edge or corner count
//! as intersecting. Tile filtering relies on that, so tiles sharing only
//! an edge with the target box are kept.

use std::fmt;
use std::str::FromStr;

use geo::{Intersects, LineString, Polygon};
use thiserror::Error;

/// Errors raised when constructing or parsing a [`GeoBounds`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundsError {
    /// A component is NaN or infinite.
    #[error("bounds components must be finite numbers")]
    NonFinite,

    /// West edge extends past -180.
    #[error("minimum x bounds {0} must be greater than or equal to -180")]
    WestOutOfRange(f64),

    /// South edge extends past -90.
    #[error("minimum y bounds {0} must be greater than or equal to -90")]
    SouthOutOfRange(f64),

    /// East edge extends past 180.
    #[error("maximum x bounds {0} must be less than or equal to 180")]
    EastOutOfRange(f64),

    /// North edge extends past 90.
    #[error("maximum y bounds {0} must be less than or equal to 90")]
    NorthOutOfRange(f64),

    /// West edge lies east of the east edge.
    #[error("minimum x bounds {min} must be less than or equal to maximum x bounds {max}")]
    XAxisInverted { min: f64, max: f64 },

    /// South edge lies north of the north edge.
    #[error("minimum y bounds {min} must be less than or equal to maximum y bounds {max}")]
    YAxisInverted { min: f64, max: f64 },

    /// A bounds string did not parse as four comma-separated numbers.
    #[error("bounds must be four comma-separated numbers, e.g. -180,-90,180,90: {0}")]
    Malformed(String),
}

/// An axis-aligned bounding box in geographic degrees.
///
/// Invariants (enforced by [`GeoBounds::new`]): `min_x <= max_x`,
/// `min_y <= max_y`, and all edges within the world extent
/// `[-180, -90, 180, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Western edge (minimum longitude).
    pub min_x: f64,
    /// Southern edge (minimum latitude).
    pub min_y: f64,
    /// Eastern edge (maximum longitude).
    pub max_x: f64,
    /// Northern edge (maximum latitude).
    pub max_y: f64,
}

impl GeoBounds {
    /// The full world extent.
    pub const WORLD: GeoBounds = GeoBounds {
        min_x: -180.0,
        min_y: -90.0,
        max_x: 180.0,
        max_y: 90.0,
    };

    /// Create a validated bounding box.
    ///
    /// Checks run in a fixed order and the first violated rule is
    /// reported: edges within the world extent first, then axis ordering.
    ///
    /// # Errors
    ///
    /// Returns the corresponding [`BoundsError`] variant for the first
    /// violated rule.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, BoundsError> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(BoundsError::NonFinite);
        }
        if min_x < -180.0 {
            return Err(BoundsError::WestOutOfRange(min_x));
        }
        if min_y < -90.0 {
            return Err(BoundsError::SouthOutOfRange(min_y));
        }
        if max_x > 180.0 {
            return Err(BoundsError::EastOutOfRange(max_x));
        }
        if max_y > 90.0 {
            return Err(BoundsError::NorthOutOfRange(max_y));
        }
        if min_x > max_x {
            return Err(BoundsError::XAxisInverted {
                min: min_x,
                max: max_x,
            });
        }
        if min_y > max_y {
            return Err(BoundsError::YAxisInverted {
                min: min_y,
                max: max_y,
            });
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Whether this box is exactly the full world extent.
    pub fn is_world(&self) -> bool {
        *self == Self::WORLD
    }

    /// This box as a closed rectangular polygon ring.
    ///
    /// Vertices run counter-clockwise from the minimum corner, with the
    /// first vertex repeated to close the ring.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring = LineString::from(vec![
            (self.min_x, self.min_y),
            (self.max_x, self.min_y),
            (self.max_x, self.max_y),
            (self.min_x, self.max_y),
            (self.min_x, self.min_y),
        ]);
        Polygon::new(ring, vec![])
    }

    /// Whether this box overlaps another, boundaries included.
    ///
    /// Both boxes are expressed as polygons and the test is delegated to
    /// the `geo` crate's intersection predicate.
    pub fn intersects(&self, other: &GeoBounds) -> bool {
        self.to_polygon().intersects(&other.to_polygon())
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl FromStr for GeoBounds {
    type Err = BoundsError;

    /// Parse `"min_x,min_y,max_x,max_y"` into a validated box.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<f64> = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| BoundsError::Malformed(s.to_string()))?;
        match components[..] {
            [min_x, min_y, max_x, max_y] => Self::new(min_x, min_y, max_x, max_y),
            _ => Err(BoundsError::Malformed(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_world() {
        let bounds = GeoBounds::new(-180.0, -90.0, 180.0, 90.0).unwrap();
        assert!(bounds.is_world());
    }

    #[test]
    fn test_new_accepts_degenerate_point() {
        let bounds = GeoBounds::new(0.0, 0.0, 0.0, 0.0).unwrap();
        assert!(!bounds.is_world());
    }

    #[test]
    fn test_new_rejects_out_of_world_edges() {
        assert_eq!(
            GeoBounds::new(-180.1, -90.0, 180.0, 90.0).unwrap_err(),
            BoundsError::WestOutOfRange(-180.1)
        );
        assert_eq!(
            GeoBounds::new(-180.0, -91.0, 180.0, 90.0).unwrap_err(),
            BoundsError::SouthOutOfRange(-91.0)
        );
        assert_eq!(
            GeoBounds::new(-180.0, -90.0, 180.5, 90.0).unwrap_err(),
            BoundsError::EastOutOfRange(180.5)
        );
        assert_eq!(
            GeoBounds::new(-180.0, -90.0, 180.0, 90.5).unwrap_err(),
            BoundsError::NorthOutOfRange(90.5)
        );
    }

    #[test]
    fn test_new_rejects_inverted_axes() {
        assert_eq!(
            GeoBounds::new(10.0, -90.0, -10.0, 90.0).unwrap_err(),
            BoundsError::XAxisInverted {
                min: 10.0,
                max: -10.0
            }
        );
        assert_eq!(
            GeoBounds::new(-10.0, 50.0, 10.0, 40.0).unwrap_err(),
            BoundsError::YAxisInverted {
                min: 50.0,
                max: 40.0
            }
        );
    }

    #[test]
    fn test_new_checks_world_edges_before_axis_order() {
        // West edge and axis order are both violated; the edge rule wins
        let err = GeoBounds::new(-200.0, -90.0, -250.0, 90.0).unwrap_err();
        assert_eq!(err, BoundsError::WestOutOfRange(-200.0));

        // Multiple edges out of range: west is checked first
        let err = GeoBounds::new(-200.0, -95.0, 200.0, 95.0).unwrap_err();
        assert_eq!(err, BoundsError::WestOutOfRange(-200.0));
    }

    #[test]
    fn test_new_rejects_nan() {
        assert_eq!(
            GeoBounds::new(f64::NAN, -90.0, 180.0, 90.0).unwrap_err(),
            BoundsError::NonFinite
        );
    }

    #[test]
    fn test_intersects_overlapping_boxes() {
        let a = GeoBounds::new(-10.0, -10.0, 10.0, 10.0).unwrap();
        let b = GeoBounds::new(0.0, 0.0, 20.0, 20.0).unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint_boxes() {
        let a = GeoBounds::new(-10.0, -10.0, -5.0, -5.0).unwrap();
        let b = GeoBounds::new(5.0, 5.0, 10.0, 10.0).unwrap();
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_edge_touching_boxes() {
        // Sharing only the lng=0 meridian still counts as intersecting
        let a = GeoBounds::new(-10.0, -10.0, 0.0, 10.0).unwrap();
        let b = GeoBounds::new(0.0, -10.0, 10.0, 10.0).unwrap();
        assert!(a.intersects(&b), "Edge-touching boxes should intersect");
    }

    #[test]
    fn test_intersects_corner_touching_boxes() {
        let a = GeoBounds::new(-10.0, -10.0, 0.0, 0.0).unwrap();
        let b = GeoBounds::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(a.intersects(&b), "Corner-touching boxes should intersect");
    }

    #[test]
    fn test_intersects_degenerate_point_box() {
        let point = GeoBounds::new(3.0, 3.0, 3.0, 3.0).unwrap();
        let a = GeoBounds::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = GeoBounds::new(20.0, 20.0, 30.0, 30.0).unwrap();
        assert!(a.intersects(&point));
        assert!(point.intersects(&a));
        assert!(!b.intersects(&point));
    }

    #[test]
    fn test_intersects_contained_box() {
        let outer = GeoBounds::new(-20.0, -20.0, 20.0, 20.0).unwrap();
        let inner = GeoBounds::new(-1.0, -1.0, 1.0, 1.0).unwrap();
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_to_polygon_closed_ring() {
        let bounds = GeoBounds::new(-10.0, -5.0, 10.0, 5.0).unwrap();
        let polygon = bounds.to_polygon();
        let ring = polygon.exterior();
        assert_eq!(ring.0.len(), 5, "Ring should have 5 vertices");
        assert_eq!(ring.0.first(), ring.0.last());
    }

    #[test]
    fn test_from_str_valid() {
        let bounds: GeoBounds = "-10.5, -20, 10.5, 20".parse().unwrap();
        assert_eq!(bounds, GeoBounds::new(-10.5, -20.0, 10.5, 20.0).unwrap());
    }

    #[test]
    fn test_from_str_wrong_arity() {
        assert!(matches!(
            "-10,-10,10".parse::<GeoBounds>(),
            Err(BoundsError::Malformed(_))
        ));
        assert!(matches!(
            "-10,-10,10,10,10".parse::<GeoBounds>(),
            Err(BoundsError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_str_not_numeric() {
        assert!(matches!(
            "a,b,c,d".parse::<GeoBounds>(),
            Err(BoundsError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_str_validates() {
        assert!(matches!(
            "10,-90,-10,90".parse::<GeoBounds>(),
            Err(BoundsError::XAxisInverted { .. })
        ));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        let bounds = GeoBounds::new(-12.25, -8.0, 14.5, 9.75).unwrap();
        let reparsed: GeoBounds = bounds.to_string().parse().unwrap();
        assert_eq!(bounds, reparsed);
    }
}
