//! # Config Crate
//!
//! Centralized configuration constants for the fluvial geometry pipeline.
//! Tolerances, search limits and unit-system constant tables are defined here
//! so the geometry, survey and WASM crates agree on every magic number.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MAX_SEARCH_ITERATIONS};
//! use config::units::UnitSystem;
//!
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//! assert_eq!(MAX_SEARCH_ITERATIONS, 1000);
//!
//! let table = UnitSystem::Metric.constants();
//! assert_eq!(table.length_unit, "m");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod units;
