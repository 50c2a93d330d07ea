//! # Stationing
//!
//! Converts planform survey coordinates (easting, northing) into a 1D
//! station along the cross-section.
//!
//! Two modes:
//!
//! - **Path**: cumulative point-to-point distance along the survey.
//! - **Projected**: each shot is projected onto a least-squares centerline
//!   and stationed by its signed distance from the first shot's projection.
//!   Side-to-side meander of the rod does not inflate the stationing, and a
//!   shot that sits behind its predecessor keeps that order (an overhang).

use crate::core::vec2::{zip_points, Vec2};
use crate::error::{ChannelError, Result};
use crate::geom::FitLine;

/// Station of every shot, starting at zero.
///
/// # Errors
/// Returns `ShapeMismatch` if the coordinate slices differ in length.
///
/// # Examples
/// ```
/// use fluvial_geometry::stationing::stationing;
///
/// let stations = stationing(&[0.0, 3.0, 3.0], &[0.0, 4.0, 5.0], false).unwrap();
/// assert_eq!(stations, vec![0.0, 5.0, 6.0]);
/// ```
pub fn stationing(eastings: &[f64], northings: &[f64], project: bool) -> Result<Vec<f64>> {
    if eastings.len() != northings.len() {
        return Err(ChannelError::ShapeMismatch {
            field: "northings",
            expected: eastings.len(),
            found: northings.len(),
        });
    }
    let points = zip_points(eastings, northings);
    if project {
        if let Some(line) = oriented_centerline(&points) {
            return Ok(projected_stations(&points, &line));
        }
    }
    Ok(path_stations(&points))
}

/// Planform projection of every shot onto the fitted centerline.
///
/// When no centerline can be fitted (fewer than two distinct shots) the shots
/// are returned unchanged.
pub fn centerline_shots(eastings: &[f64], northings: &[f64]) -> Vec<Vec2> {
    let points = zip_points(eastings, northings);
    match FitLine::fit(&points) {
        Some(line) => points.iter().map(|&p| line.project(p)).collect(),
        None => points,
    }
}

fn path_stations(points: &[Vec2]) -> Vec<f64> {
    let mut stations = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance(*p);
        }
        stations.push(total);
    }
    stations
}

fn projected_stations(points: &[Vec2], line: &FitLine) -> Vec<f64> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let start = line.parameter(*first);
    points.iter().map(|&p| line.parameter(p) - start).collect()
}

/// Fits the centerline and orients it from the first shot towards the last.
fn oriented_centerline(points: &[Vec2]) -> Option<FitLine> {
    let line = FitLine::fit(points)?;
    let (first, last) = (points.first()?, points.last()?);
    if line.parameter(*last) < line.parameter(*first) {
        Some(line.reversed())
    } else {
        Some(line)
    }
}
