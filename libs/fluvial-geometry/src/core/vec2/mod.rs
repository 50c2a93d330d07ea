//! 2D vector definitions for the geometry kernel.
//!
//! Provides a type alias for `glam::DVec2`. Planform shots use `x = easting`,
//! `y = northing`; profile points use `x = station`, `y = elevation`.

pub use glam::DVec2 as Vec2;

/// Zips two parallel coordinate slices into points.
///
/// Extra entries in the longer slice are ignored; callers check lengths first.
///
/// # Examples
/// ```
/// use fluvial_geometry::core::vec2::{zip_points, Vec2};
///
/// let points = zip_points(&[0.0, 1.0], &[5.0, 4.0]);
/// assert_eq!(points, vec![Vec2::new(0.0, 5.0), Vec2::new(1.0, 4.0)]);
/// ```
pub fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<Vec2> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| Vec2::new(x, y))
        .collect()
}

/// Splits points back into parallel coordinate vectors.
pub fn unzip_points(points: &[Vec2]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}

#[cfg(test)]
mod tests;
