//! # Geometry Primitives
//!
//! Low-level operations on station/elevation polylines and planform points.
//!
//! ## Contents
//!
//! - **Intersection**: `segments_intersect` (exact orientation predicates)
//! - **Integration**: `area_under_curve`, `flow_area`, `polyline_length`
//! - **Lines**: `FitLine` least-squares centerline with point projection
//! - **Lookup**: `is_non_decreasing`, `min_index`, `nearest_index`,
//!   `interpolate_station`

use config::constants::approx_zero;
use robust::{orient2d, Coord};

use crate::core::vec2::Vec2;

// =============================================================================
// INTERSECTION
// =============================================================================

#[inline]
fn coord(p: Vec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Sign of the turn `a → b → c`: positive for counter-clockwise, negative for
/// clockwise, zero for collinear. Evaluated with adaptive exact arithmetic.
#[inline]
pub fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

/// Returns true if `p`, known to be collinear with `a`-`b`, lies within the
/// segment's bounding box.
#[inline]
fn within_box(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Tests whether closed segments `a1-a2` and `b1-b2` share at least one point.
///
/// Touching endpoints and collinear overlap both count as intersection.
///
/// ## Example
///
/// ```
/// use fluvial_geometry::geom::segments_intersect;
/// use fluvial_geometry::Vec2;
///
/// let cross = segments_intersect(
///     Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0),
///     Vec2::new(0.0, 2.0), Vec2::new(2.0, 0.0),
/// );
/// assert!(cross);
/// ```
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_box(b1, b2, a1))
        || (d2 == 0.0 && within_box(b1, b2, a2))
        || (d3 == 0.0 && within_box(a1, a2, b1))
        || (d4 == 0.0 && within_box(a1, a2, b2))
}

// =============================================================================
// INTEGRATION
// =============================================================================

/// Signed area between a station/elevation curve and a horizontal datum,
/// integrated with the trapezoidal rule.
///
/// Portions of the curve above the datum contribute positive area when
/// stations increase.
pub fn area_under_curve(points: &[Vec2], datum: f64) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].x - w[0].x) * ((w[0].y - datum) + (w[1].y - datum)) / 2.0)
        .sum()
}

/// Cross-sectional flow area between a submerged curve and the water surface.
///
/// ## Example
///
/// ```
/// use fluvial_geometry::geom::flow_area;
/// use fluvial_geometry::Vec2;
///
/// // A triangle 4 wide and 2 deep.
/// let points = [Vec2::new(0.0, 2.0), Vec2::new(2.0, 0.0), Vec2::new(4.0, 2.0)];
/// assert_eq!(flow_area(&points, 2.0), 4.0);
/// ```
pub fn flow_area(points: &[Vec2], water_elevation: f64) -> f64 {
    -area_under_curve(points, water_elevation)
}

/// Total Euclidean length of a polyline.
pub fn polyline_length(points: &[Vec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

// =============================================================================
// LINES
// =============================================================================

/// A least-squares line through a point cloud.
///
/// Fit by total least squares (principal axis of the covariance), which stays
/// well defined for cross-sections shot due north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLine {
    /// Centroid of the fitted points.
    pub origin: Vec2,
    /// Unit direction of the line.
    pub direction: Vec2,
}

impl FitLine {
    /// Fits a line through `points`.
    ///
    /// Returns `None` when fewer than two distinct points are given.
    pub fn fit(points: &[Vec2]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let origin = points.iter().copied().sum::<Vec2>() / n;

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for p in points {
            let d = *p - origin;
            sxx += d.x * d.x;
            syy += d.y * d.y;
            sxy += d.x * d.y;
        }
        if approx_zero(sxx + syy) {
            return None;
        }

        let angle = 0.5 * (2.0 * sxy).atan2(sxx - syy);
        let direction = Vec2::new(angle.cos(), angle.sin());
        Some(Self { origin, direction })
    }

    /// Signed distance along the line from `origin` to the foot of `p`.
    #[inline]
    pub fn parameter(&self, p: Vec2) -> f64 {
        (p - self.origin).dot(self.direction)
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn project(&self, p: Vec2) -> Vec2 {
        self.origin + self.direction * self.parameter(p)
    }

    /// The same line with its direction reversed.
    pub fn reversed(self) -> Self {
        Self {
            origin: self.origin,
            direction: -self.direction,
        }
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Returns true if `values` never decrease.
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}

/// Index of the minimum value. Ties go to the leftmost index.
///
/// ## Example
///
/// ```
/// use fluvial_geometry::geom::min_index;
/// assert_eq!(min_index(&[3.0, 1.0, 2.0, 1.0]), Some(1));
/// ```
pub fn min_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the value closest to `target`. Ties go to the leftmost index.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        let distance = (v - target).abs();
        match best {
            Some((_, b)) if distance >= b => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Station where the segment `a`-`b` reaches `elevation`.
///
/// Falls back to `a`'s station for a flat segment.
pub fn interpolate_station(a: Vec2, b: Vec2, elevation: f64) -> f64 {
    let rise = b.y - a.y;
    if rise == 0.0 {
        return a.x;
    }
    a.x + (elevation - a.y) * (b.x - a.x) / rise
}

/// Elevation where the segment `a`-`b` reaches `station`.
///
/// Falls back to `a`'s elevation for a vertical segment.
pub fn interpolate_elevation(a: Vec2, b: Vec2, station: f64) -> f64 {
    let run = b.x - a.x;
    if run == 0.0 {
        return a.y;
    }
    a.y + (station - a.x) * (b.y - a.y) / run
}
