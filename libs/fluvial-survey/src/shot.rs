//! A single survey shot.

use std::fmt;

use fluvial_geometry::Vec2;
use serde::Serialize;

use crate::parser::ShotMeaning;

/// One row of a survey export with its interpreted description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shot {
    pub number: String,
    pub easting: f64,
    pub northing: f64,
    pub elevation: f64,
    pub description: String,
    pub meaning: ShotMeaning,
}

impl Shot {
    /// Planform position (easting, northing).
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.easting, self.northing)
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<shot {}: {}>", self.number, self.description)
    }
}
