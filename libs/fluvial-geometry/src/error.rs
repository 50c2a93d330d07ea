//! # Channel Errors
//!
//! Error types for cross-section construction and analysis.
//!
//! ## Error Policy
//!
//! - Geometric validation errors abort construction; no partially built
//!   cross-section is ever returned
//! - Missing optional inputs (slope, roughness, bankfull elevation) are not
//!   errors; the affected statistics are `None`
//! - Search non-convergence is an outcome, see [`crate::search::SearchStatus`]

use config::constants::ConfigError;
use std::fmt;
use thiserror::Error;

/// Which polyline a geometry error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// The polyline as surveyed, one point per shot.
    Raw,
    /// The polyline after overhang resolution.
    Resolved,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Raw => write!(f, "raw"),
            SeriesKind::Resolved => write!(f, "resolved"),
        }
    }
}

/// Errors that can occur while building or analyzing a cross-section.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChannelError {
    /// Coordinate sequences differ in length.
    #[error("Shape mismatch: {field} has length {found}; expected {expected}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// Too few shots to form a polyline.
    #[error("Too few points: {count} (min: {min})")]
    InsufficientPoints { count: usize, min: usize },

    /// The station/elevation polyline crosses itself.
    #[error("Invalid geometry: {series} polyline self-intersects on segments {first_segment} and {second_segment}")]
    InvalidGeometry {
        series: SeriesKind,
        first_segment: usize,
        second_segment: usize,
    },

    /// A configuration value is outside its domain.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// The water elevation does not rise above the channel bottom.
    #[error("Elevation {elevation} is at or below the channel bottom ({minimum})")]
    BelowChannel { elevation: f64, minimum: f64 },

    /// The thalweg is not submerged at the water elevation.
    #[error("Thalweg (index {thalweg_index}, elevation {thalweg_elevation}) is at or above elevation {elevation}")]
    ThalwegAboveBankfull {
        thalweg_index: usize,
        thalweg_elevation: f64,
        elevation: f64,
    },

    /// A bankfull search did not reach its goal.
    #[error("Search for {target} = {goal} did not converge after {iterations} iterations (best elevation {best_elevation})")]
    NonConvergence {
        target: String,
        goal: f64,
        iterations: usize,
        best_elevation: f64,
    },

    /// Invalid search configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ChannelError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type alias for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;

// =============================================================================
// TESTS
// =============================================================================
