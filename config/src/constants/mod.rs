//! # Configuration Constants
//!
//! Centralized constants for the cross-section pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Geometry**: Minimum survey sizes and overhang defaults
//! - **Search**: Bankfull elevation search limits

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when deciding whether two stations or elevations coincide, e.g. when
/// an interpolated bankfull boundary lands exactly on a surveyed shot.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Minimum number of survey shots needed to describe a cross-section.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_CROSS_SECTION_POINTS;
/// assert!(MIN_CROSS_SECTION_POINTS >= 2);
/// ```
pub const MIN_CROSS_SECTION_POINTS: usize = 2;

/// Default overhang fill fraction.
///
/// `0.0` cuts overhangs away, `1.0` fills them as solid ground.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FILL_FRACTION;
///
/// let user_fill: Option<f64> = None;
/// assert_eq!(user_fill.unwrap_or(DEFAULT_FILL_FRACTION), 1.0);
/// ```
pub const DEFAULT_FILL_FRACTION: f64 = 1.0;

// =============================================================================
// SEARCH CONSTANTS
// =============================================================================

/// Maximum number of candidate elevations evaluated by the bankfull search.
pub const MAX_SEARCH_ITERATIONS: usize = 1000;

/// Limit on upper-bound expansion during the bankfull search.
///
/// The search gives up once its upper bound sits more than this many channel
/// reliefs above the search floor.
///
/// # Example
///
/// ```rust
/// use config::constants::SEARCH_EXPANSION_CAP;
///
/// let (floor, top) = (10.0, 12.0);
/// let ceiling = floor + SEARCH_EXPANSION_CAP * (top - floor);
/// assert_eq!(ceiling, 210.0);
/// ```
pub const SEARCH_EXPANSION_CAP: f64 = 100.0;

/// Divisor applied to the goal to derive the default search tolerance.
///
/// A goal of `6.0` gets a tolerance of `0.006`.
pub const DEFAULT_TOLERANCE_DIVISOR: f64 = 1000.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Default absolute tolerance for a search goal.
///
/// # Example
///
/// ```rust
/// use config::constants::default_tolerance;
/// assert_eq!(default_tolerance(6.0), 0.006);
/// ```
#[inline]
pub fn default_tolerance(goal: f64) -> f64 {
    goal / DEFAULT_TOLERANCE_DIVISOR
}

// =============================================================================
// SEARCH CONFIGURATION
// =============================================================================

/// Limits applied to the bankfull elevation search.
///
/// # Examples
/// ```
/// use config::constants::SearchConfig;
/// let config = SearchConfig::default();
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of candidate elevations to evaluate.
    pub max_iterations: usize,
    /// Upper-bound expansion limit, in channel reliefs above the floor.
    pub expansion_cap: f64,
}

impl SearchConfig {
    /// Builds a search configuration, rejecting limits the search cannot honor.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SearchConfig;
    /// let cfg = SearchConfig::new(50, 10.0).expect("valid config");
    /// assert_eq!(cfg.max_iterations, 50);
    /// ```
    pub fn new(max_iterations: usize, expansion_cap: f64) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::InvalidIterations(max_iterations));
        }
        if !expansion_cap.is_finite() || expansion_cap <= 1.0 {
            return Err(ConfigError::InvalidExpansionCap(expansion_cap));
        }
        Ok(Self {
            max_iterations,
            expansion_cap,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_SEARCH_ITERATIONS,
            expansion_cap: SEARCH_EXPANSION_CAP,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the iteration limit is zero.
    InvalidIterations(usize),
    /// Raised when the expansion cap is not a finite value above one.
    InvalidExpansionCap(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidIterations(value) => {
                write!(f, "max_iterations must be positive: {value}")
            }
            ConfigError::InvalidExpansionCap(value) => {
                write!(f, "expansion_cap must be finite and > 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
