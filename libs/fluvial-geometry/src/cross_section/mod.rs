//! # Cross-Section
//!
//! The aggregate that owns a surveyed cross-section and everything derived
//! from it.
//!
//! ## Pipeline
//!
//! ```text
//! shots (easting, northing, elevation)
//!       ↓ stationing
//! raw series ──→ self-intersection check
//!       ↓ overhang resolution
//! resolved series ──→ thalweg
//!       ↓ clip at bankfull elevation
//! bankfull series ──→ hydraulic statistics
//! ```
//!
//! Validation happens once, at construction; a `CrossSection` that exists is
//! always analyzable. Statistics are recomputed in full whenever the
//! bankfull elevation or flow parameters change.

use std::fmt;

use config::constants::{DEFAULT_FILL_FRACTION, MIN_CROSS_SECTION_POINTS};
use config::units::{UnitConstants, UnitSystem};
use serde::Serialize;

use crate::bankfull::{clip_to_elevation, BankfullSeries};
use crate::core::series::StationSeries;
use crate::core::vec2::Vec2;
use crate::error::{ChannelError, Result, SeriesKind};
use crate::geom::{min_index, nearest_index};
use crate::hydraulics::{FlowParameters, HydraulicStats};
use crate::overhang::{count_reversals, resolve_overhangs, validate_fill_fraction};
use crate::search::{search_bankfull, BankfullTarget, SearchBounds, SearchOptions, SearchOutcome};
use crate::stationing::{centerline_shots, stationing};
use crate::validate::ensure_simple;

/// Construction options for a [`CrossSection`].
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionOptions {
    /// Display name of the cross-section.
    pub name: Option<String>,
    /// Unit system of the survey.
    pub unit_system: UnitSystem,
    /// Station shots along a fitted centerline instead of the survey path.
    pub project: bool,
    /// Bankfull water-surface elevation.
    pub bankfull_elevation: Option<f64>,
    /// Station of the thalweg; the deepest shot is used when absent.
    pub thalweg_station: Option<f64>,
    /// How overhangs are resolved: 0 cuts, 1 fills.
    pub fill_fraction: f64,
    /// Manning's roughness coefficient.
    pub roughness: Option<f64>,
    /// Dimensionless water-surface slope.
    pub water_slope: Option<f64>,
}

impl Default for CrossSectionOptions {
    fn default() -> Self {
        Self {
            name: None,
            unit_system: UnitSystem::default(),
            project: true,
            bankfull_elevation: None,
            thalweg_station: None,
            fill_fraction: DEFAULT_FILL_FRACTION,
            roughness: None,
            water_slope: None,
        }
    }
}

/// A non-fatal condition noticed while building a cross-section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryWarning {
    /// The survey folds back on itself; the resolved series differs from the
    /// raw one.
    Overhangs { reversals: usize },
    /// The supplied thalweg station lies outside the survey; the deepest shot
    /// was used instead.
    ThalwegOutOfBounds { station: f64 },
}

impl fmt::Display for GeometryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryWarning::Overhangs { reversals } => {
                write!(f, "overhangs present in geometry ({reversals} station reversals)")
            }
            GeometryWarning::ThalwegOutOfBounds { station } => write!(
                f,
                "thalweg station {station} is outside the surveyed stations; using the deepest shot"
            ),
        }
    }
}

/// A validated channel cross-section with bankfull statistics.
#[derive(Debug, Clone)]
pub struct CrossSection {
    name: Option<String>,
    unit_system: UnitSystem,
    eastings: Vec<f64>,
    northings: Vec<f64>,
    raw: StationSeries,
    resolved: StationSeries,
    fill_fraction: f64,
    thalweg_station: Option<f64>,
    thalweg_index: usize,
    flow: FlowParameters,
    bankfull_elevation: Option<f64>,
    bankfull: Option<BankfullSeries>,
    stats: Option<HydraulicStats>,
    warnings: Vec<GeometryWarning>,
}

impl CrossSection {
    /// Builds a cross-section from survey shots.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the coordinate slices differ in length
    /// - `InsufficientPoints` for fewer than two shots
    /// - `InvalidGeometry` if the station/elevation polyline crosses itself
    /// - `InvalidParameter` for out-of-domain options
    /// - `BelowChannel` / `ThalwegAboveBankfull` for an inconsistent bankfull
    ///   elevation
    ///
    /// # Examples
    /// ```
    /// use fluvial_geometry::{CrossSection, CrossSectionOptions};
    ///
    /// let xs = CrossSection::new(
    ///     &[0.0, 2.0, 4.0, 6.0, 8.0],
    ///     &[0.0; 5],
    ///     &[5.0, 1.0, 0.0, 1.0, 5.0],
    ///     CrossSectionOptions {
    ///         bankfull_elevation: Some(3.0),
    ///         ..Default::default()
    ///     },
    /// ).unwrap();
    /// assert_eq!(xs.width(), Some(6.0));
    /// ```
    pub fn new(
        eastings: &[f64],
        northings: &[f64],
        elevations: &[f64],
        options: CrossSectionOptions,
    ) -> Result<Self> {
        if northings.len() != eastings.len() {
            return Err(ChannelError::ShapeMismatch {
                field: "northings",
                expected: eastings.len(),
                found: northings.len(),
            });
        }
        if elevations.len() != eastings.len() {
            return Err(ChannelError::ShapeMismatch {
                field: "elevations",
                expected: eastings.len(),
                found: elevations.len(),
            });
        }
        let stations = stationing(eastings, northings, options.project)?;
        let raw = StationSeries::new(stations, elevations.to_vec())?;
        Self::build(raw, (eastings.to_vec(), northings.to_vec()), options)
    }

    /// Builds a cross-section from stations that were already computed.
    ///
    /// `options.project` is ignored.
    pub fn from_stations(
        stations: &[f64],
        elevations: &[f64],
        options: CrossSectionOptions,
    ) -> Result<Self> {
        let raw = StationSeries::new(stations.to_vec(), elevations.to_vec())?;
        Self::build(raw, (Vec::new(), Vec::new()), options)
    }

    fn build(
        raw: StationSeries,
        (eastings, northings): (Vec<f64>, Vec<f64>),
        options: CrossSectionOptions,
    ) -> Result<Self> {
        if raw.len() < MIN_CROSS_SECTION_POINTS {
            return Err(ChannelError::InsufficientPoints {
                count: raw.len(),
                min: MIN_CROSS_SECTION_POINTS,
            });
        }
        validate_fill_fraction(options.fill_fraction)?;
        if let Some(station) = options.thalweg_station {
            if !station.is_finite() {
                return Err(ChannelError::invalid_parameter(
                    "thalweg_station",
                    format!("must be finite, got {station}"),
                ));
            }
        }
        let flow = FlowParameters {
            water_slope: options.water_slope,
            roughness: options.roughness,
        };
        flow.validate()?;

        ensure_simple(&raw, SeriesKind::Raw)?;

        let mut warnings = Vec::new();
        let reversals = count_reversals(raw.stations());
        let resolved = if reversals > 0 {
            log::warn!(
                "{}: overhangs present in geometry ({reversals} station reversals)",
                display_name(options.name.as_deref())
            );
            warnings.push(GeometryWarning::Overhangs { reversals });
            let resolved = resolve_overhangs(&raw, options.fill_fraction)?;
            ensure_simple(&resolved, SeriesKind::Resolved)?;
            resolved
        } else {
            raw.clone()
        };

        let (thalweg_index, thalweg_warning) = locate_thalweg(&resolved, options.thalweg_station)?;
        if let Some(warning) = thalweg_warning {
            log::warn!("{}: {warning}", display_name(options.name.as_deref()));
            warnings.push(warning);
        }

        let mut section = Self {
            name: options.name,
            unit_system: options.unit_system,
            eastings,
            northings,
            raw,
            resolved,
            fill_fraction: options.fill_fraction,
            thalweg_station: options.thalweg_station,
            thalweg_index,
            flow,
            bankfull_elevation: None,
            bankfull: None,
            stats: None,
            warnings,
        };
        section.set_bankfull_elevation(options.bankfull_elevation)?;
        Ok(section)
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Name given at construction.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Unit system of the survey.
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Constant table for the survey's unit system.
    pub fn units(&self) -> &'static UnitConstants {
        self.unit_system.constants()
    }

    /// Station/elevation series as surveyed.
    pub fn raw(&self) -> &StationSeries {
        &self.raw
    }

    /// Station/elevation series with overhangs resolved.
    pub fn resolved(&self) -> &StationSeries {
        &self.resolved
    }

    /// True if the survey folds back on itself.
    pub fn has_overhangs(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, GeometryWarning::Overhangs { .. }))
    }

    /// Fill fraction used to resolve overhangs.
    pub fn fill_fraction(&self) -> f64 {
        self.fill_fraction
    }

    /// Non-fatal conditions noticed during construction.
    pub fn warnings(&self) -> &[GeometryWarning] {
        &self.warnings
    }

    /// Index of the thalweg in the resolved series.
    pub fn thalweg_index(&self) -> usize {
        self.thalweg_index
    }

    /// Station of the thalweg in the resolved series.
    pub fn thalweg_station(&self) -> f64 {
        self.resolved.stations()[self.thalweg_index]
    }

    /// Elevation of the thalweg.
    pub fn thalweg_elevation(&self) -> f64 {
        self.resolved.elevations()[self.thalweg_index]
    }

    /// Projection of each survey shot onto the fitted centerline.
    ///
    /// Empty for cross-sections built from stations.
    pub fn centerline_shots(&self) -> Vec<Vec2> {
        centerline_shots(&self.eastings, &self.northings)
    }

    // =========================================================================
    // BANKFULL STATISTICS
    // =========================================================================

    /// Current bankfull elevation.
    pub fn bankfull_elevation(&self) -> Option<f64> {
        self.bankfull_elevation
    }

    /// Submerged series at the bankfull elevation.
    pub fn bankfull_series(&self) -> Option<&BankfullSeries> {
        self.bankfull.as_ref()
    }

    /// All statistics at the bankfull elevation.
    pub fn stats(&self) -> Option<&HydraulicStats> {
        self.stats.as_ref()
    }

    /// Water-surface slope.
    pub fn water_slope(&self) -> Option<f64> {
        self.flow.water_slope
    }

    /// Manning's roughness coefficient.
    pub fn roughness(&self) -> Option<f64> {
        self.flow.roughness
    }

    /// Bankfull flow area.
    pub fn area(&self) -> Option<f64> {
        self.stats.map(|s| s.area)
    }

    /// Bankfull width.
    pub fn width(&self) -> Option<f64> {
        self.stats.map(|s| s.width)
    }

    /// Bankfull mean depth.
    pub fn mean_depth(&self) -> Option<f64> {
        self.stats.map(|s| s.mean_depth)
    }

    /// Bankfull max depth.
    pub fn max_depth(&self) -> Option<f64> {
        self.stats.map(|s| s.max_depth)
    }

    /// Bankfull wetted perimeter.
    pub fn wetted_perimeter(&self) -> Option<f64> {
        self.stats.map(|s| s.wetted_perimeter)
    }

    /// Bankfull hydraulic radius.
    pub fn hydraulic_radius(&self) -> Option<f64> {
        self.stats.map(|s| s.hydraulic_radius)
    }

    /// Bankfull shear stress; needs a water-surface slope.
    pub fn shear_stress(&self) -> Option<f64> {
        self.stats.and_then(|s| s.shear_stress)
    }

    /// Bankfull discharge; needs slope and roughness.
    pub fn discharge(&self) -> Option<f64> {
        self.stats.and_then(|s| s.discharge)
    }

    /// Flood-prone elevation. Not computed yet.
    pub fn flood_prone_elevation(&self) -> Option<f64> {
        None
    }

    /// Flood-prone width. Not computed yet.
    pub fn flood_prone_width(&self) -> Option<f64> {
        None
    }

    /// Largest particle entrained at bankfull. Not computed yet.
    pub fn entrained_particle_size(&self) -> Option<f64> {
        None
    }

    /// Statistics at any water elevation, leaving the cross-section unchanged.
    pub fn hydraulics_at(&self, elevation: f64) -> Result<HydraulicStats> {
        self.evaluate(elevation, &self.flow).map(|(_, stats)| stats)
    }

    fn evaluate(&self, elevation: f64, flow: &FlowParameters) -> Result<(BankfullSeries, HydraulicStats)> {
        let clipped = clip_to_elevation(&self.resolved, self.thalweg_index, elevation)?;
        let stats = HydraulicStats::compute(&clipped, flow, self.units());
        Ok((clipped, stats))
    }

    /// Replaces flow parameters and recomputes statistics.
    fn apply(&mut self, elevation: Option<f64>, flow: FlowParameters) -> Result<()> {
        flow.validate()?;
        let derived = elevation
            .map(|e| self.evaluate(e, &flow))
            .transpose()?;
        self.flow = flow;
        self.bankfull_elevation = elevation;
        match derived {
            Some((clipped, stats)) => {
                self.bankfull = Some(clipped);
                self.stats = Some(stats);
            }
            None => {
                self.bankfull = None;
                self.stats = None;
            }
        }
        Ok(())
    }

    /// Sets the bankfull elevation and recomputes every statistic.
    ///
    /// On error the cross-section keeps its previous elevation and statistics.
    pub fn set_bankfull_elevation(&mut self, elevation: Option<f64>) -> Result<()> {
        self.apply(elevation, self.flow)
    }

    /// Sets the water-surface slope and recomputes every statistic.
    pub fn set_water_slope(&mut self, water_slope: Option<f64>) -> Result<()> {
        let flow = FlowParameters {
            water_slope,
            ..self.flow
        };
        self.apply(self.bankfull_elevation, flow)
    }

    /// Sets Manning's roughness and recomputes every statistic.
    pub fn set_roughness(&mut self, roughness: Option<f64>) -> Result<()> {
        let flow = FlowParameters {
            roughness,
            ..self.flow
        };
        self.apply(self.bankfull_elevation, flow)
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Elevation range a bankfull search starts from.
    ///
    /// The floor is the lowest shot, raised to the thalweg elevation when a
    /// thalweg station was supplied so a deeper secondary channel does not
    /// drag the search down. The current bankfull elevation, if any, is the
    /// first candidate.
    pub fn search_bounds(&self) -> SearchBounds {
        let mut floor = self.resolved.min_elevation().unwrap_or_default();
        if self.thalweg_station.is_some() {
            floor = floor.max(self.thalweg_elevation());
        }
        SearchBounds {
            floor,
            top: self.resolved.max_elevation().unwrap_or_default(),
            initial_guess: self.bankfull_elevation,
        }
    }

    /// Searches for the elevation at which `target` equals `goal`.
    ///
    /// The cross-section is not modified; pass the outcome to
    /// [`CrossSection::commit_search`] to keep it.
    ///
    /// # Examples
    /// ```
    /// use fluvial_geometry::search::{BankfullTarget, SearchOptions};
    /// use fluvial_geometry::{CrossSection, CrossSectionOptions};
    ///
    /// let xs = CrossSection::from_stations(
    ///     &[0.0, 2.0, 4.0, 6.0, 8.0],
    ///     &[5.0, 1.0, 0.0, 1.0, 5.0],
    ///     CrossSectionOptions::default(),
    /// ).unwrap();
    /// let outcome = xs.find_bankfull(BankfullTarget::Width, 6.0, &SearchOptions::default()).unwrap();
    /// assert!(outcome.is_converged());
    /// assert!((outcome.elevation - 3.0).abs() < 0.01);
    /// assert_eq!(xs.bankfull_elevation(), None);
    /// ```
    pub fn find_bankfull(
        &self,
        target: BankfullTarget,
        goal: f64,
        options: &SearchOptions,
    ) -> Result<SearchOutcome> {
        search_bankfull(
            |elevation| self.hydraulics_at(elevation),
            self.search_bounds(),
            target,
            goal,
            options,
        )
    }

    /// Adopts a search result as the bankfull elevation.
    ///
    /// A failed search is adopted only when `accept_failed`. Returns the
    /// elevation that was set, if any.
    pub fn commit_search(&mut self, outcome: &SearchOutcome, accept_failed: bool) -> Result<Option<f64>> {
        let elevation = outcome.elevation_if(accept_failed);
        if elevation.is_some() {
            self.set_bankfull_elevation(elevation)?;
        }
        Ok(elevation)
    }
}

impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(display_name(self.name.as_deref()))
    }
}

fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("UNNAMED")
}

/// Picks the thalweg index in the resolved series.
///
/// Without a station the deepest shot wins, leftmost on ties. A station
/// inside the survey snaps to the nearest shot; one outside it falls back to
/// the deepest shot with a warning.
fn locate_thalweg(
    resolved: &StationSeries,
    station: Option<f64>,
) -> Result<(usize, Option<GeometryWarning>)> {
    let deepest = || {
        min_index(resolved.elevations()).ok_or(ChannelError::InsufficientPoints {
            count: 0,
            min: MIN_CROSS_SECTION_POINTS,
        })
    };
    let Some(station) = station else {
        return Ok((deepest()?, None));
    };
    let (first, last) = resolved.station_bounds().ok_or(ChannelError::InsufficientPoints {
        count: 0,
        min: MIN_CROSS_SECTION_POINTS,
    })?;
    if station < first || station > last {
        return Ok((deepest()?, Some(GeometryWarning::ThalwegOutOfBounds { station })));
    }
    let index = nearest_index(resolved.stations(), station).ok_or(ChannelError::InsufficientPoints {
        count: 0,
        min: MIN_CROSS_SECTION_POINTS,
    })?;
    Ok((index, None))
}

#[cfg(test)]
mod tests;
