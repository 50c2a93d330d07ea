//! # Self-Intersection Validation
//!
//! A cross-section polyline must be simple: no two non-adjacent segments may
//! share a point. Adjacent segments always share their common vertex and are
//! not compared. Zero-length segments (a shot recorded twice) are skipped,
//! and the segments on either side of one count as adjacent. An overhang
//! folds the polyline without crossing it, so it passes validation; a
//! polyline that crosses itself cannot be analyzed.

use crate::core::series::StationSeries;
use crate::core::vec2::Vec2;
use crate::error::{ChannelError, Result, SeriesKind};
use crate::geom::segments_intersect;

/// Finds the first pair of intersecting non-adjacent segments.
///
/// Segment `i` joins points `i` and `i + 1`. Pairs are scanned in
/// lexicographic order, so the reported pair is the lowest one. Segments
/// joining identical points are ignored.
///
/// # Examples
/// ```
/// use fluvial_geometry::validate::find_self_intersection;
/// use fluvial_geometry::Vec2;
///
/// let bowtie = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(2.0, 2.0),
///     Vec2::new(2.0, 0.0),
///     Vec2::new(0.0, 2.0),
/// ];
/// assert_eq!(find_self_intersection(&bowtie), Some((0, 2)));
/// ```
pub fn find_self_intersection(points: &[Vec2]) -> Option<(usize, usize)> {
    let segments: Vec<usize> = points
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[0] != w[1])
        .map(|(i, _)| i)
        .collect();
    for (n, &i) in segments.iter().enumerate() {
        for &j in segments.iter().skip(n + 2) {
            if segments_intersect(points[i], points[i + 1], points[j], points[j + 1]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Fails with `InvalidGeometry` if the series crosses itself.
pub fn ensure_simple(series: &StationSeries, kind: SeriesKind) -> Result<()> {
    match find_self_intersection(&series.points()) {
        Some((first_segment, second_segment)) => Err(ChannelError::InvalidGeometry {
            series: kind,
            first_segment,
            second_segment,
        }),
        None => Ok(()),
    }
}
