//! # Overhang Resolution
//!
//! A surveyor shooting an undercut bank walks the rod back under the lip, so
//! the station sequence reverses. Downstream hydraulics need elevation as a
//! single-valued function of station; this module rewrites each folded run.
//!
//! ## Algorithm
//!
//! For the first station reversal:
//!
//! 1. The tip is the last shot before the reversal; its station `hi` is the
//!    right edge of the fold.
//! 2. Walk forward until the survey returns to `hi`, tracking the lowest
//!    station `lo` reached. The fold spans `[lo, hi]`.
//! 3. Every shot inside the fold is replaced by one point per distinct
//!    station. At each such station the polyline is cut by a vertical line;
//!    the lowest and highest crossings are blended by the fill fraction.
//! 4. Consecutive identical points left by the rewrite are merged.
//! 5. Repeat until the series is non-decreasing. Each pass consumes the
//!    first reversal, so the loop ends after at most one pass per shot.

use crate::core::series::StationSeries;
use crate::core::vec2::Vec2;
use crate::error::{ChannelError, Result};
use crate::geom::{interpolate_elevation, is_non_decreasing};

/// Checks that a fill fraction lies in `[0, 1]`.
pub fn validate_fill_fraction(fill_fraction: f64) -> Result<()> {
    if (0.0..=1.0).contains(&fill_fraction) {
        Ok(())
    } else {
        Err(ChannelError::invalid_parameter(
            "fill_fraction",
            format!("must be in [0, 1], got {fill_fraction}"),
        ))
    }
}

/// Number of places where the station sequence steps backwards.
pub fn count_reversals(stations: &[f64]) -> usize {
    stations.windows(2).filter(|w| w[1] < w[0]).count()
}

/// Rewrites a series so its stations never decrease.
///
/// `fill_fraction = 0` cuts overhangs down to the lowest surveyed surface,
/// `1` fills them up to the highest, values between blend linearly.
/// A series without reversals is returned unchanged.
///
/// # Errors
/// Returns `InvalidParameter` if `fill_fraction` is outside `[0, 1]`.
///
/// # Examples
/// ```
/// use fluvial_geometry::overhang::resolve_overhangs;
/// use fluvial_geometry::StationSeries;
///
/// let raw = StationSeries::new(vec![0.0, 3.0, 1.0, 5.0], vec![5.0, 4.0, 2.0, 0.0]).unwrap();
/// let resolved = resolve_overhangs(&raw, 1.0).unwrap();
/// assert!(resolved.is_monotonic());
/// assert_eq!(resolved.stations(), &[0.0, 1.0, 3.0, 5.0]);
/// ```
pub fn resolve_overhangs(series: &StationSeries, fill_fraction: f64) -> Result<StationSeries> {
    validate_fill_fraction(fill_fraction)?;

    let mut points = series.points();
    while let Some(reversal) = first_reversal(&points) {
        points = resolve_fold(&points, reversal, fill_fraction);
    }
    Ok(StationSeries::from_points(&points))
}

fn first_reversal(points: &[Vec2]) -> Option<usize> {
    points.windows(2).position(|w| w[1].x < w[0].x).map(|i| i + 1)
}

/// Replaces the fold that starts reversing at `reversal`.
fn resolve_fold(points: &[Vec2], reversal: usize, fill_fraction: f64) -> Vec<Vec2> {
    let tip = reversal - 1;
    let hi = points[tip].x;

    // First shot back at or past the tip; `points.len()` if the survey ends
    // inside the fold.
    let rejoin = (reversal..points.len())
        .find(|&i| points[i].x >= hi)
        .unwrap_or(points.len());
    let lo = points[reversal..rejoin]
        .iter()
        .map(|p| p.x)
        .fold(hi, f64::min);

    // The prefix before the reversal is non-decreasing, so the first shot
    // inside the fold is a partition point.
    let entry = points[..=tip].partition_point(|p| p.x <= lo);

    let mut stations: Vec<f64> = points[entry..rejoin].iter().map(|p| p.x).collect();
    stations.push(lo);
    stations.sort_by(f64::total_cmp);
    stations.dedup();

    let first_segment = entry.saturating_sub(1);
    let last_segment = rejoin.min(points.len() - 1);
    let span = &points[first_segment..=last_segment];

    let mut resolved = Vec::with_capacity(points.len());
    resolved.extend_from_slice(&points[..entry]);
    for station in stations {
        if let Some((low, high)) = vertical_extent(span, station) {
            resolved.push(Vec2::new(station, low + fill_fraction * (high - low)));
        }
    }
    resolved.extend_from_slice(&points[rejoin..]);
    // A prefix shot at `lo` and its blend coincide when the blend lands on it.
    resolved.dedup();
    resolved
}

/// Lowest and highest elevation at which `polyline` crosses `station`.
fn vertical_extent(polyline: &[Vec2], station: f64) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    let mut include = |z: f64| {
        extent = Some(match extent {
            Some((low, high)) => (low.min(z), high.max(z)),
            None => (z, z),
        });
    };

    if polyline.len() == 1 && polyline[0].x == station {
        include(polyline[0].y);
    }
    for w in polyline.windows(2) {
        let (a, b) = (w[0], w[1]);
        if station < a.x.min(b.x) || station > a.x.max(b.x) {
            continue;
        }
        if a.x == b.x {
            include(a.y);
            include(b.y);
        } else {
            include(interpolate_elevation(a, b, station));
        }
    }
    extent
}

/// Returns true if the series already satisfies the resolved invariant.
pub fn is_resolved(series: &StationSeries) -> bool {
    is_non_decreasing(series.stations())
}
