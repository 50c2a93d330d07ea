//! Core data types shared by every stage of the pipeline.

pub mod series;
pub mod vec2;

pub use series::StationSeries;
pub use vec2::Vec2;
