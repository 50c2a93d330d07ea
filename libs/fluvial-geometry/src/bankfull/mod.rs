//! # Bankfull Clipping
//!
//! Extracts the submerged part of a resolved cross-section at a water
//! elevation. Starting at the thalweg, the walk extends left and right while
//! shots stay at or below the water; the first dry shot on each side bounds
//! the channel and the exact crossing is interpolated.
//!
//! When a walk runs off the end of the survey the channel is open on that
//! side. The survey edge is then treated as a vertical wall: a point at the
//! water elevation is placed directly above the last shot. Width and area are
//! lower bounds in that case, flagged by [`BankfullSeries::is_clipped`].

use config::constants::approx_equal;
use serde::Serialize;

use crate::core::series::StationSeries;
use crate::core::vec2::Vec2;
use crate::error::{ChannelError, Result};
use crate::geom::interpolate_station;

/// The submerged polyline at a water elevation.
///
/// Both endpoints lie exactly at `elevation`; every interior point is at or
/// below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankfullSeries {
    elevation: f64,
    series: StationSeries,
    first_index: usize,
    last_index: usize,
    thalweg_offset: usize,
    left_open: bool,
    right_open: bool,
}

impl BankfullSeries {
    /// Water elevation the series was clipped at.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Submerged stations, including the closing endpoints.
    pub fn stations(&self) -> &[f64] {
        self.series.stations()
    }

    /// Submerged elevations, including the closing endpoints.
    pub fn elevations(&self) -> &[f64] {
        self.series.elevations()
    }

    /// Submerged points in order.
    pub fn points(&self) -> Vec<Vec2> {
        self.series.points()
    }

    /// The clipped polyline as a series.
    pub fn series(&self) -> &StationSeries {
        &self.series
    }

    /// Inclusive range of resolved-series indices that are submerged.
    pub fn source_range(&self) -> (usize, usize) {
        (self.first_index, self.last_index)
    }

    /// Position of the thalweg within this series.
    pub fn thalweg_offset(&self) -> usize {
        self.thalweg_offset
    }

    /// True if the water reached the left end of the survey.
    pub fn left_open(&self) -> bool {
        self.left_open
    }

    /// True if the water reached the right end of the survey.
    pub fn right_open(&self) -> bool {
        self.right_open
    }

    /// True if either side was closed at the survey boundary.
    pub fn is_clipped(&self) -> bool {
        self.left_open || self.right_open
    }
}

/// Clips a resolved series at `elevation` around the thalweg.
///
/// # Errors
///
/// - `BelowChannel` if `elevation` is at or below the lowest shot
/// - `ThalwegAboveBankfull` if the thalweg shot is not submerged
/// - `InvalidParameter` for a non-finite elevation or out-of-range thalweg
///
/// # Examples
/// ```
/// use fluvial_geometry::bankfull::clip_to_elevation;
/// use fluvial_geometry::StationSeries;
///
/// let channel = StationSeries::new(
///     vec![0.0, 2.0, 4.0, 6.0, 8.0],
///     vec![5.0, 1.0, 0.0, 1.0, 5.0],
/// ).unwrap();
/// let clipped = clip_to_elevation(&channel, 2, 3.0).unwrap();
/// assert_eq!(clipped.stations(), &[1.0, 2.0, 4.0, 6.0, 7.0]);
/// ```
pub fn clip_to_elevation(
    series: &StationSeries,
    thalweg_index: usize,
    elevation: f64,
) -> Result<BankfullSeries> {
    if !elevation.is_finite() {
        return Err(ChannelError::invalid_parameter(
            "elevation",
            format!("must be finite, got {elevation}"),
        ));
    }
    let minimum = series.min_elevation().ok_or(ChannelError::InsufficientPoints {
        count: 0,
        min: 1,
    })?;
    if elevation <= minimum {
        return Err(ChannelError::BelowChannel { elevation, minimum });
    }

    let points = series.points();
    let thalweg = *points.get(thalweg_index).ok_or_else(|| {
        ChannelError::invalid_parameter(
            "thalweg_index",
            format!("{thalweg_index} is outside a series of {} points", points.len()),
        )
    })?;
    if thalweg.y >= elevation {
        return Err(ChannelError::ThalwegAboveBankfull {
            thalweg_index,
            thalweg_elevation: thalweg.y,
            elevation,
        });
    }

    let mut first = thalweg_index;
    while first > 0 && points[first - 1].y <= elevation {
        first -= 1;
    }
    let mut last = thalweg_index;
    while last + 1 < points.len() && points[last + 1].y <= elevation {
        last += 1;
    }

    let left_open = first == 0;
    let right_open = last + 1 == points.len();

    let mut clipped = Vec::with_capacity(last - first + 3);
    let left_station = if left_open {
        points[first].x
    } else {
        interpolate_station(points[first - 1], points[first], elevation)
    };
    if !approx_equal(points[first].y, elevation) {
        clipped.push(Vec2::new(left_station, elevation));
    }
    let thalweg_offset = clipped.len() + (thalweg_index - first);

    clipped.extend_from_slice(&points[first..=last]);

    let right_station = if right_open {
        points[last].x
    } else {
        interpolate_station(points[last + 1], points[last], elevation)
    };
    if !approx_equal(points[last].y, elevation) {
        clipped.push(Vec2::new(right_station, elevation));
    }

    // Shots within EPSILON of the water become exact endpoints.
    if let Some(p) = clipped.first_mut() {
        p.y = elevation;
    }
    if let Some(p) = clipped.last_mut() {
        p.y = elevation;
    }

    Ok(BankfullSeries {
        elevation,
        series: StationSeries::from_points(&clipped),
        first_index: first,
        last_index: last,
        thalweg_offset,
        left_open,
        right_open,
    })
}
