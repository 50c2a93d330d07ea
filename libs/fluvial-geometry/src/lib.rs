//! # Fluvial Geometry
//!
//! Cross-section geometry and bankfull hydraulics for surveyed stream
//! channels.
//!
//! ## Architecture
//!
//! ```text
//! survey shots → stationing → overhang resolution → bankfull clip → HydraulicStats
//!                                                        ↑
//!                                           bankfull search (bisection)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fluvial_geometry::{CrossSection, CrossSectionOptions};
//! use fluvial_geometry::search::{BankfullTarget, SearchOptions};
//!
//! let mut xs = CrossSection::new(
//!     &[0.0, 2.0, 4.0, 6.0, 8.0],
//!     &[0.0, 0.0, 0.0, 0.0, 0.0],
//!     &[5.0, 1.0, 0.0, 1.0, 5.0],
//!     CrossSectionOptions::default(),
//! ).unwrap();
//!
//! let outcome = xs.find_bankfull(BankfullTarget::Width, 6.0, &SearchOptions::default()).unwrap();
//! xs.commit_search(&outcome, false).unwrap();
//! assert!(xs.area().is_some());
//! ```

pub mod bankfull;
pub mod core;
pub mod cross_section;
pub mod error;
pub mod geom;
pub mod hydraulics;
pub mod overhang;
pub mod search;
pub mod stationing;
pub mod validate;

pub use bankfull::{clip_to_elevation, BankfullSeries};
pub use crate::core::{StationSeries, Vec2};
pub use cross_section::{CrossSection, CrossSectionOptions, GeometryWarning};
pub use error::{ChannelError, Result, SeriesKind};
pub use hydraulics::{FlowParameters, HydraulicStats};
pub use search::{BankfullTarget, SearchOptions, SearchOutcome, SearchStatus};

pub use config::units::UnitSystem;
