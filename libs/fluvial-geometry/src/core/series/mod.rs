//! Station/elevation series.
//!
//! A [`StationSeries`] is a 2D polyline stored as two parallel vectors. The
//! raw series of a cross-section mirrors the survey one-to-one and may fold
//! back on itself; the resolved series is non-decreasing in station.

use serde::Serialize;

use crate::core::vec2::Vec2;
use crate::error::{ChannelError, Result};

/// An ordered station/elevation polyline with equal-length coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSeries {
    stations: Vec<f64>,
    elevations: Vec<f64>,
}

impl StationSeries {
    /// Creates a series, rejecting mismatched lengths and non-finite values.
    ///
    /// # Examples
    /// ```
    /// use fluvial_geometry::StationSeries;
    ///
    /// let series = StationSeries::new(vec![0.0, 2.0], vec![5.0, 1.0]).unwrap();
    /// assert_eq!(series.len(), 2);
    /// assert!(StationSeries::new(vec![0.0], vec![5.0, 1.0]).is_err());
    /// ```
    pub fn new(stations: Vec<f64>, elevations: Vec<f64>) -> Result<Self> {
        if stations.len() != elevations.len() {
            return Err(ChannelError::ShapeMismatch {
                field: "elevations",
                expected: stations.len(),
                found: elevations.len(),
            });
        }
        if stations.iter().chain(&elevations).any(|v| !v.is_finite()) {
            return Err(ChannelError::invalid_parameter(
                "coordinates",
                "stations and elevations must be finite",
            ));
        }
        Ok(Self {
            stations,
            elevations,
        })
    }

    /// Builds a series from points without re-validating them.
    pub(crate) fn from_points(points: &[Vec2]) -> Self {
        let (stations, elevations) = crate::core::vec2::unzip_points(points);
        Self {
            stations,
            elevations,
        }
    }

    /// Station coordinates.
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    /// Elevation coordinates.
    pub fn elevations(&self) -> &[f64] {
        &self.elevations
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the point at `index` as `(station, elevation)`.
    pub fn point(&self, index: usize) -> Option<Vec2> {
        Some(Vec2::new(
            *self.stations.get(index)?,
            *self.elevations.get(index)?,
        ))
    }

    /// All points in order.
    pub fn points(&self) -> Vec<Vec2> {
        crate::core::vec2::zip_points(&self.stations, &self.elevations)
    }

    /// Lowest elevation, or `None` for an empty series.
    pub fn min_elevation(&self) -> Option<f64> {
        self.elevations.iter().copied().reduce(f64::min)
    }

    /// Highest elevation, or `None` for an empty series.
    pub fn max_elevation(&self) -> Option<f64> {
        self.elevations.iter().copied().reduce(f64::max)
    }

    /// Returns true if stations never decrease.
    pub fn is_monotonic(&self) -> bool {
        crate::geom::is_non_decreasing(&self.stations)
    }

    /// First and last station.
    pub fn station_bounds(&self) -> Option<(f64, f64)> {
        Some((*self.stations.first()?, *self.stations.last()?))
    }
}

#[cfg(test)]
mod tests;
