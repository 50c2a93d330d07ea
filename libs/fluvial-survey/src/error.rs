//! # Survey Errors
//!
//! Error types for reading and interpreting survey exports.

use fluvial_geometry::ChannelError;
use thiserror::Error;

/// Errors that can occur while reading a survey.
#[derive(Error, Debug)]
pub enum SurveyError {
    /// A mandatory keyword or column name is empty.
    #[error("Missing {section} key '{key}'")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },

    /// The CSV header lacks a mapped column.
    #[error("Column '{0}' not found in survey header")]
    MissingColumn(String),

    /// A coordinate cell is not a number.
    #[error("Row {row}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// Failed to read CSV data.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A shot group could not be turned into a cross-section.
    #[error("Cross-section '{name}': {source}")]
    Geometry {
        name: String,
        #[source]
        source: ChannelError,
    },
}

/// Type alias for Results using SurveyError
pub type Result<T> = std::result::Result<T, SurveyError>;
