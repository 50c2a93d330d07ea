//! # Fluvial Survey
//!
//! Reads geomorphic survey exports and turns them into analyzable
//! cross-sections.
//!
//! ## Architecture
//!
//! ```text
//! CSV export → Survey (shots + parsed descriptions)
//!                 ├── profiles: Vec<ShotGroup>
//!                 └── cross_sections: Vec<ShotGroup> → fluvial_geometry::CrossSection
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fluvial_survey::{Survey, SurveyOptions};
//!
//! let data = "\
//! Name,Northing,Easting,Elevation,Description
//! 1,0,0,4,xs1
//! 2,0,1,2,xs1-bkf
//! 3,0,2,0,xs1-thw
//! 4,0,3,2,xs1-bkf
//! 5,0,4,4,xs1
//! ";
//! let survey = Survey::from_csv_str(data, SurveyOptions::default()).unwrap();
//! let sections = survey.cross_section_objects(true).unwrap();
//! assert_eq!(sections[0].bankfull_elevation(), Some(2.0));
//! ```

pub mod error;
pub mod group;
pub mod keywords;
pub mod parser;
pub mod shot;
pub mod survey;

pub use error::{Result, SurveyError};
pub use group::{GroupAttributes, ShotGroup};
pub use keywords::{ColumnMap, FeatureTag, Keywords, MorphType};
pub use parser::{DescriptionParser, ShotKind, ShotMeaning};
pub use shot::Shot;
pub use survey::{Survey, SurveyOptions};

pub use config::units::UnitSystem;
