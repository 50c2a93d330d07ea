//! # Keywords
//!
//! Field crews call out features in the shot description with short
//! keywords, e.g. `xs2-ri-bkf_left pin`. [`Keywords`] holds those
//! abbreviations and [`ColumnMap`] names the CSV columns holding each field.

use serde::Serialize;

use crate::error::{Result, SurveyError};

/// Description keywords used by a survey crew.
///
/// `profile`, `cross_section` and `thalweg` are mandatory; the remaining
/// features are skipped when `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keywords {
    pub profile: String,
    pub cross_section: String,
    pub thalweg: String,
    pub riffle: Option<String>,
    pub run: Option<String>,
    pub pool: Option<String>,
    pub glide: Option<String>,
    pub top_of_bank: Option<String>,
    pub bankfull: Option<String>,
    pub water_surface: Option<String>,
    /// Separates the name from descriptors.
    pub break_char: char,
    /// Starts a free-text comment.
    pub comment_char: char,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            profile: "pro".to_string(),
            cross_section: "xs".to_string(),
            thalweg: "thw".to_string(),
            riffle: Some("ri".to_string()),
            run: Some("ru".to_string()),
            pool: Some("po".to_string()),
            glide: Some("gl".to_string()),
            top_of_bank: Some("tob".to_string()),
            bankfull: Some("bkf".to_string()),
            water_surface: Some("ws".to_string()),
            break_char: '-',
            comment_char: '_',
        }
    }
}

impl Keywords {
    /// Fails with `MissingKey` if a mandatory keyword is empty.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("profile", &self.profile),
            ("cross_section", &self.cross_section),
            ("thalweg", &self.thalweg),
        ] {
            if value.is_empty() {
                return Err(SurveyError::MissingKey {
                    section: "keyword",
                    key,
                });
            }
        }
        if self.break_char == self.comment_char {
            return Err(SurveyError::MissingKey {
                section: "keyword",
                key: "comment_char",
            });
        }
        Ok(())
    }

    /// Every feature keyword paired with the tag it produces.
    pub fn features(&self) -> Vec<(FeatureTag, &str)> {
        let optional = [
            (FeatureTag::Riffle, &self.riffle),
            (FeatureTag::Run, &self.run),
            (FeatureTag::Pool, &self.pool),
            (FeatureTag::Glide, &self.glide),
            (FeatureTag::TopOfBank, &self.top_of_bank),
            (FeatureTag::Bankfull, &self.bankfull),
            (FeatureTag::WaterSurface, &self.water_surface),
        ];
        let mut features = vec![
            (FeatureTag::Profile, self.profile.as_str()),
            (FeatureTag::CrossSection, self.cross_section.as_str()),
            (FeatureTag::Thalweg, self.thalweg.as_str()),
        ];
        features.extend(
            optional
                .into_iter()
                .filter_map(|(tag, keyword)| keyword.as_deref().map(|k| (tag, k)))
                .filter(|(_, k)| !k.is_empty()),
        );
        features
    }

    /// Keyword for a morphological unit, if configured.
    pub fn morph_keyword(&self, morph: MorphType) -> Option<&str> {
        let keyword = match morph {
            MorphType::Riffle => &self.riffle,
            MorphType::Run => &self.run,
            MorphType::Pool => &self.pool,
            MorphType::Glide => &self.glide,
        };
        keyword.as_deref().filter(|k| !k.is_empty())
    }
}

/// A feature named by a description keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureTag {
    Profile,
    CrossSection,
    Thalweg,
    Riffle,
    Run,
    Pool,
    Glide,
    TopOfBank,
    Bankfull,
    WaterSurface,
}

/// Channel morphology a cross-section was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphType {
    Riffle,
    Run,
    Pool,
    Glide,
}

impl MorphType {
    pub const ALL: [MorphType; 4] = [
        MorphType::Riffle,
        MorphType::Run,
        MorphType::Pool,
        MorphType::Glide,
    ];
}

/// CSV header names for each shot field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMap {
    pub shot_number: String,
    pub northing: String,
    pub easting: String,
    pub elevation: String,
    pub description: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            shot_number: "Name".to_string(),
            northing: "Northing".to_string(),
            easting: "Easting".to_string(),
            elevation: "Elevation".to_string(),
            description: "Description".to_string(),
        }
    }
}

impl ColumnMap {
    /// Fails with `MissingKey` if any column name is empty.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("shot_number", &self.shot_number),
            ("northing", &self.northing),
            ("easting", &self.easting),
            ("elevation", &self.elevation),
            ("description", &self.description),
        ] {
            if value.is_empty() {
                return Err(SurveyError::MissingKey {
                    section: "column",
                    key,
                });
            }
        }
        Ok(())
    }
}
