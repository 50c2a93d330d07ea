//! WASM-facing entry points for cross-section analysis.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Requests arrive as JSON so the browser can post survey
//! tables straight from a form. Native tests use the `*_internal` helpers,
//! which return Rust errors instead of `JsValue`s.
//!
//! ```
//! let request = r#"{
//!     "stations": [0, 2, 4, 6, 8],
//!     "elevations": [5, 1, 0, 1, 5],
//!     "bankfull_elevation": 3
//! }"#;
//! let handle = fluvial_wasm::analyze_cross_section_internal(request).unwrap();
//! assert_eq!(handle.width(), Some(6.0));
//! ```

use config::units::{UnitSystem, UnknownUnitSystem};
use fluvial_geometry::search::SearchOptions;
use fluvial_geometry::{BankfullTarget, ChannelError, CrossSection, CrossSectionOptions, SearchOutcome};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticList, Severity};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "fluvial-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the unit system assumed when a request names none.
///
/// # Examples
/// ```
/// assert_eq!(fluvial_wasm::default_unit_system(), "imperial");
/// ```
#[wasm_bindgen]
pub fn default_unit_system() -> String {
    UnitSystem::default().to_string()
}

/// Errors raised while serving a request from JavaScript.
#[derive(Error, Debug)]
pub enum WasmError {
    /// The request is not valid JSON or lacks required fields.
    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    UnitSystem(#[from] UnknownUnitSystem),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

impl WasmError {
    /// Flattens the error into diagnostics for the browser.
    pub fn diagnostics(&self) -> DiagnosticList {
        let diagnostic = match self {
            WasmError::Channel(err) => Diagnostic::from(err),
            WasmError::Request(err) => Diagnostic::new(Severity::Error, "request", err.to_string()),
            WasmError::UnitSystem(err) => {
                Diagnostic::new(Severity::Error, "unit_system", err.to_string())
            }
        };
        DiagnosticList::new(vec![diagnostic])
    }
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// JSON shape of an analysis request.
///
/// Either `stations` or both `eastings` and `northings` must be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrossSectionRequest {
    pub name: Option<String>,
    pub stations: Option<Vec<f64>>,
    pub eastings: Option<Vec<f64>>,
    pub northings: Option<Vec<f64>>,
    pub elevations: Vec<f64>,
    /// Unit system name, e.g. `"metric"`. Takes precedence over `metric`.
    pub unit_system: Option<String>,
    /// Checkbox-style alternative to `unit_system`.
    pub metric: Option<bool>,
    pub project: Option<bool>,
    pub bankfull_elevation: Option<f64>,
    pub thalweg_station: Option<f64>,
    pub fill_fraction: Option<f64>,
    pub roughness: Option<f64>,
    pub water_slope: Option<f64>,
}

impl CrossSectionRequest {
    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, WasmError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the cross-section this request describes.
    pub fn build(self) -> Result<CrossSection, WasmError> {
        let defaults = CrossSectionOptions::default();
        let unit_system = match (&self.unit_system, self.metric) {
            (Some(name), _) => name.parse()?,
            (None, Some(metric)) => UnitSystem::from_metric_flag(metric),
            (None, None) => defaults.unit_system,
        };
        let options = CrossSectionOptions {
            name: self.name,
            unit_system,
            project: self.project.unwrap_or(defaults.project),
            bankfull_elevation: self.bankfull_elevation,
            thalweg_station: self.thalweg_station,
            fill_fraction: self.fill_fraction.unwrap_or(defaults.fill_fraction),
            roughness: self.roughness,
            water_slope: self.water_slope,
        };
        let section = match (self.stations, self.eastings, self.northings) {
            (Some(stations), _, _) => {
                CrossSection::from_stations(&stations, &self.elevations, options)?
            }
            (None, Some(eastings), Some(northings)) => {
                CrossSection::new(&eastings, &northings, &self.elevations, options)?
            }
            (None, _, _) => {
                return Err(ChannelError::invalid_parameter(
                    "stations",
                    "provide stations, or eastings and northings",
                )
                .into())
            }
        };
        Ok(section)
    }
}

/// An analyzed cross-section held on the WASM side.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const xs = analyze_cross_section(JSON.stringify(request));
/// // chart.plot(xs.stations(), xs.elevations());
/// // console.log(xs.area(), xs.width());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct CrossSectionHandle {
    section: CrossSection,
}

#[wasm_bindgen]
impl CrossSectionHandle {
    /// Display name, `"UNNAMED"` when none was given.
    pub fn name(&self) -> String {
        self.section.to_string()
    }

    /// Resolved stations as a Float64Array.
    pub fn stations(&self) -> Vec<f64> {
        self.section.resolved().stations().to_vec()
    }

    /// Resolved elevations as a Float64Array.
    pub fn elevations(&self) -> Vec<f64> {
        self.section.resolved().elevations().to_vec()
    }

    /// Stations of the submerged bankfull polygon; empty without a bankfull.
    pub fn bankfull_stations(&self) -> Vec<f64> {
        self.section
            .bankfull_series()
            .map(|b| b.stations().to_vec())
            .unwrap_or_default()
    }

    /// Elevations of the submerged bankfull polygon; empty without a bankfull.
    pub fn bankfull_elevations(&self) -> Vec<f64> {
        self.section
            .bankfull_series()
            .map(|b| b.elevations().to_vec())
            .unwrap_or_default()
    }

    pub fn thalweg_station(&self) -> f64 {
        self.section.thalweg_station()
    }

    pub fn bankfull_elevation(&self) -> Option<f64> {
        self.section.bankfull_elevation()
    }

    pub fn area(&self) -> Option<f64> {
        self.section.area()
    }

    pub fn width(&self) -> Option<f64> {
        self.section.width()
    }

    pub fn mean_depth(&self) -> Option<f64> {
        self.section.mean_depth()
    }

    pub fn max_depth(&self) -> Option<f64> {
        self.section.max_depth()
    }

    pub fn wetted_perimeter(&self) -> Option<f64> {
        self.section.wetted_perimeter()
    }

    pub fn hydraulic_radius(&self) -> Option<f64> {
        self.section.hydraulic_radius()
    }

    pub fn shear_stress(&self) -> Option<f64> {
        self.section.shear_stress()
    }

    pub fn discharge(&self) -> Option<f64> {
        self.section.discharge()
    }

    /// All bankfull statistics as a JSON string, or `null`.
    pub fn stats_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.section.stats())
            .map_err(|err| WasmError::from(err).into())
    }

    /// Warnings noticed while building the cross-section.
    pub fn diagnostics(&self) -> DiagnosticList {
        let mut diagnostics: Vec<Diagnostic> =
            self.section.warnings().iter().map(Diagnostic::from).collect();
        if self.section.stats().is_some_and(|s| s.clipped_at_boundary) {
            diagnostics.push(Diagnostic::new(
                Severity::Info,
                "clipped_at_boundary",
                "bankfull rises above the end of the survey; closed with a vertical wall",
            ));
        }
        DiagnosticList::new(diagnostics)
    }

    /// Moves the bankfull elevation and recomputes every statistic.
    ///
    /// # Errors
    /// The handle is left unchanged when the elevation is rejected.
    pub fn set_bankfull_elevation(&mut self, elevation: Option<f64>) -> Result<(), JsValue> {
        self.section
            .set_bankfull_elevation(elevation)
            .map_err(|err| WasmError::from(err).into())
    }

    /// Searches for `goal` and adopts the result when it converges.
    ///
    /// Returns the new bankfull elevation.
    pub fn fit_bankfull(&mut self, target: &str, goal: f64) -> Result<f64, JsValue> {
        self.fit_bankfull_internal(target, goal).map_err(JsValue::from)
    }
}

impl CrossSectionHandle {
    /// The wrapped cross-section.
    pub fn section(&self) -> &CrossSection {
        &self.section
    }

    /// Host-side version of [`CrossSectionHandle::fit_bankfull`].
    pub fn fit_bankfull_internal(&mut self, target: &str, goal: f64) -> Result<f64, WasmError> {
        let target: BankfullTarget = target.parse()?;
        let outcome = self
            .section
            .find_bankfull(target, goal, &SearchOptions::default())?;
        let elevation = outcome.into_result()?;
        self.section.commit_search(&outcome, false)?;
        Ok(elevation)
    }
}

/// Analyzes a cross-section described by a JSON request.
///
/// # Errors
/// Returns a JavaScript error with a human-readable message when the request
/// is malformed or the geometry is invalid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const xs = analyze_cross_section(JSON.stringify({
/// //   eastings, northings, elevations, bankfull_elevation: 101.2,
/// // }));
/// ```
#[wasm_bindgen]
pub fn analyze_cross_section(json: &str) -> Result<CrossSectionHandle, JsValue> {
    analyze_cross_section_internal(json).map_err(JsValue::from)
}

/// Host-only helper behind [`analyze_cross_section`].
pub fn analyze_cross_section_internal(json: &str) -> Result<CrossSectionHandle, WasmError> {
    let section = CrossSectionRequest::from_json(json)?.build()?;
    Ok(CrossSectionHandle { section })
}

/// Finds the elevation at which `target` equals `goal` for the described
/// cross-section, without keeping the cross-section.
///
/// # Errors
/// Fails when the request is invalid or the search does not converge.
#[wasm_bindgen]
pub fn search_bankfull(json: &str, target: &str, goal: f64) -> Result<f64, JsValue> {
    search_bankfull_internal(json, target, goal)
        .and_then(|outcome| outcome.into_result().map_err(WasmError::from))
        .map_err(JsValue::from)
}

/// Host-only helper behind [`search_bankfull`]; returns the full outcome,
/// converged or not.
///
/// # Examples
/// ```
/// let request = r#"{"stations": [0, 2, 4, 6, 8], "elevations": [5, 1, 0, 1, 5]}"#;
/// let outcome = fluvial_wasm::search_bankfull_internal(request, "width", 6.0).unwrap();
/// assert!(outcome.is_converged());
/// ```
pub fn search_bankfull_internal(
    json: &str,
    target: &str,
    goal: f64,
) -> Result<SearchOutcome, WasmError> {
    let target: BankfullTarget = target.parse()?;
    let section = CrossSectionRequest::from_json(json)?.build()?;
    Ok(section.find_bankfull(target, goal, &SearchOptions::default())?)
}
