//! # Hydraulic Statistics
//!
//! Bankfull statistics computed from a clipped cross-section.
//!
//! | Statistic | Definition |
//! |-----------|------------|
//! | area | trapezoidal integral of depth below the water surface |
//! | wetted perimeter | length of the submerged polyline |
//! | width | last minus first submerged station |
//! | max depth | water elevation minus the lowest submerged shot |
//! | mean depth | area / width |
//! | hydraulic radius | area / wetted perimeter |
//! | shear stress | γ · mean depth · slope |
//! | discharge | (k / n) · A · R^(2/3) · S^(1/2) (Manning) |
//!
//! Shear stress needs a water-surface slope; discharge needs slope and
//! roughness. Without them those fields are `None`.

use config::units::UnitConstants;
use serde::Serialize;

use crate::bankfull::BankfullSeries;
use crate::error::{ChannelError, Result};
use crate::geom::{flow_area, polyline_length};

/// Flow inputs that come from outside the cross-section survey.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowParameters {
    /// Dimensionless water-surface slope.
    pub water_slope: Option<f64>,
    /// Manning's roughness coefficient.
    pub roughness: Option<f64>,
}

impl FlowParameters {
    /// Rejects negative slopes and non-positive roughness.
    pub fn validate(&self) -> Result<()> {
        if let Some(slope) = self.water_slope {
            if !slope.is_finite() || slope < 0.0 {
                return Err(ChannelError::invalid_parameter(
                    "water_slope",
                    format!("must be finite and non-negative, got {slope}"),
                ));
            }
        }
        if let Some(n) = self.roughness {
            if !n.is_finite() || n <= 0.0 {
                return Err(ChannelError::invalid_parameter(
                    "roughness",
                    format!("must be finite and positive, got {n}"),
                ));
            }
        }
        Ok(())
    }
}

/// Statistics of a channel filled to one water elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydraulicStats {
    /// Water elevation the statistics describe.
    pub elevation: f64,
    /// Cross-sectional flow area.
    pub area: f64,
    /// Top width of the flow.
    pub width: f64,
    /// Area divided by width.
    pub mean_depth: f64,
    /// Depth at the deepest submerged shot.
    pub max_depth: f64,
    /// Length of submerged channel boundary.
    pub wetted_perimeter: f64,
    /// Area divided by wetted perimeter.
    pub hydraulic_radius: f64,
    /// Boundary shear stress, when a slope is known.
    pub shear_stress: Option<f64>,
    /// Manning discharge, when slope and roughness are known.
    pub discharge: Option<f64>,
    /// True if the water reached the end of the survey; width and area are
    /// then lower bounds.
    pub clipped_at_boundary: bool,
}

impl HydraulicStats {
    /// Computes every statistic for a clipped series.
    ///
    /// # Examples
    /// ```
    /// use config::units::UnitSystem;
    /// use fluvial_geometry::bankfull::clip_to_elevation;
    /// use fluvial_geometry::hydraulics::{FlowParameters, HydraulicStats};
    /// use fluvial_geometry::StationSeries;
    ///
    /// let channel = StationSeries::new(
    ///     vec![0.0, 2.0, 4.0, 6.0, 8.0],
    ///     vec![5.0, 1.0, 0.0, 1.0, 5.0],
    /// ).unwrap();
    /// let clipped = clip_to_elevation(&channel, 2, 3.0).unwrap();
    /// let stats = HydraulicStats::compute(
    ///     &clipped,
    ///     &FlowParameters::default(),
    ///     UnitSystem::Metric.constants(),
    /// );
    /// assert_eq!(stats.area, 12.0);
    /// assert_eq!(stats.width, 6.0);
    /// assert_eq!(stats.shear_stress, None);
    /// ```
    pub fn compute(
        bankfull: &BankfullSeries,
        flow: &FlowParameters,
        units: &UnitConstants,
    ) -> Self {
        let elevation = bankfull.elevation();
        let points = bankfull.points();
        let stations = bankfull.stations();

        let area = flow_area(&points, elevation);
        let wetted_perimeter = polyline_length(&points);
        let width = match (stations.first(), stations.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        };
        let max_depth = bankfull
            .series()
            .min_elevation()
            .map_or(0.0, |lowest| elevation - lowest);

        let mean_depth = ratio(area, width);
        let hydraulic_radius = ratio(area, wetted_perimeter);

        let shear_stress = flow
            .water_slope
            .map(|slope| units.gamma_water * mean_depth * slope);
        let discharge = match (flow.water_slope, flow.roughness) {
            (Some(slope), Some(n)) => Some(
                (units.mannings_numerator / n)
                    * area
                    * hydraulic_radius.powf(2.0 / 3.0)
                    * slope.sqrt(),
            ),
            _ => None,
        };

        Self {
            elevation,
            area,
            width,
            mean_depth,
            max_depth,
            wetted_perimeter,
            hydraulic_radius,
            shear_stress,
            discharge,
            clipped_at_boundary: bankfull.is_clipped(),
        }
    }
}

/// `numerator / denominator`, or zero for a degenerate channel.
#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests;
