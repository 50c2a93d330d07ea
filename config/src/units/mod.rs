//! Unit-system constant tables.
//!
//! Survey coordinates are either metric (meters) or imperial (feet). The unit
//! system selects the unit weight of water used for shear stress and the
//! numerator of Manning's equation used for discharge.

use std::fmt;
use std::str::FromStr;

/// Constants that depend on the survey's unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConstants {
    /// Label for lengths (`"m"` or `"ft"`).
    pub length_unit: &'static str,
    /// Unit weight of water (N/m³ or lb/ft³).
    pub gamma_water: f64,
    /// Numerator of Manning's equation (1.0 metric, 1.486 imperial).
    pub mannings_numerator: f64,
}

/// Metric constant table.
///
/// # Example
///
/// ```rust
/// use config::units::METRIC_CONSTANTS;
/// assert_eq!(METRIC_CONSTANTS.mannings_numerator, 1.0);
/// ```
pub const METRIC_CONSTANTS: UnitConstants = UnitConstants {
    length_unit: "m",
    gamma_water: 9810.0,
    mannings_numerator: 1.0,
};

/// Imperial constant table.
///
/// # Example
///
/// ```rust
/// use config::units::IMPERIAL_CONSTANTS;
/// assert_eq!(IMPERIAL_CONSTANTS.length_unit, "ft");
/// ```
pub const IMPERIAL_CONSTANTS: UnitConstants = UnitConstants {
    length_unit: "ft",
    gamma_water: 62.4,
    mannings_numerator: 1.486,
};

/// Unit system of a survey.
///
/// Imperial is the default, matching survey crews that record feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    /// Meters, newtons.
    Metric,
    /// Feet, pounds.
    #[default]
    Imperial,
}

impl UnitSystem {
    /// Returns the constant table for this unit system.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::units::UnitSystem;
    /// assert_eq!(UnitSystem::Imperial.constants().gamma_water, 62.4);
    /// ```
    pub fn constants(self) -> &'static UnitConstants {
        match self {
            UnitSystem::Metric => &METRIC_CONSTANTS,
            UnitSystem::Imperial => &IMPERIAL_CONSTANTS,
        }
    }

    /// Selects a unit system from the common `metric: bool` survey flag.
    pub fn from_metric_flag(metric: bool) -> Self {
        if metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = UnknownUnitSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "m" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "ft" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(UnknownUnitSystem(s.to_string())),
        }
    }
}

/// Error returned when a unit-system name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnitSystem(pub String);

impl fmt::Display for UnknownUnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit system: {}", self.0)
    }
}

impl std::error::Error for UnknownUnitSystem {}

#[cfg(test)]
mod tests;
