//! # Survey
//!
//! Reads a CSV survey export into shots and groups them by name.
//!
//! ```text
//! CSV rows → Shot (parsed description) → profiles / cross-sections
//! ```
//!
//! Groups keep the order in which their names first appear. Shots whose
//! name matches neither the profile nor the cross-section keyword (control
//! points, benchmarks) are kept in [`Survey::shots`] but belong to no group.

use std::collections::HashMap;
use std::io;

use config::units::UnitSystem;
use csv::{ReaderBuilder, StringRecord, Trim};
use fluvial_geometry::CrossSection;
use log::{debug, info};

use crate::error::{Result, SurveyError};
use crate::group::ShotGroup;
use crate::keywords::{ColumnMap, Keywords};
use crate::parser::{DescriptionParser, ShotKind};
use crate::shot::Shot;

/// How a survey export is read and interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyOptions {
    pub unit_system: UnitSystem,
    pub delimiter: u8,
    pub keywords: Keywords,
    pub columns: ColumnMap,
}

impl Default for SurveyOptions {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::default(),
            delimiter: b',',
            keywords: Keywords::default(),
            columns: ColumnMap::default(),
        }
    }
}

/// A parsed survey.
#[derive(Debug, Clone)]
pub struct Survey {
    options: SurveyOptions,
    shots: Vec<Shot>,
    profiles: Vec<ShotGroup>,
    cross_sections: Vec<ShotGroup>,
}

/// Header positions of the mapped columns.
struct ColumnIndex {
    shot_number: usize,
    northing: usize,
    easting: usize,
    elevation: usize,
    description: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord, columns: &ColumnMap) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| SurveyError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            shot_number: find(&columns.shot_number)?,
            northing: find(&columns.northing)?,
            easting: find(&columns.easting)?,
            elevation: find(&columns.elevation)?,
            description: find(&columns.description)?,
        })
    }
}

impl Survey {
    /// Parses a survey held in memory.
    pub fn from_csv_str(data: &str, options: SurveyOptions) -> Result<Self> {
        Self::from_reader(data.as_bytes(), options)
    }

    /// Parses a survey from any reader. The first row must be a header.
    ///
    /// # Errors
    ///
    /// - `MissingKey` for an empty mandatory keyword or column name
    /// - `MissingColumn` if the header lacks a mapped column
    /// - `InvalidNumber` for a non-numeric coordinate
    /// - `CsvParse` for malformed CSV
    pub fn from_reader<R: io::Read>(reader: R, options: SurveyOptions) -> Result<Self> {
        options.keywords.validate()?;
        options.columns.validate()?;

        let mut rdr = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);
        let index = ColumnIndex::locate(rdr.headers()?, &options.columns)?;
        let parser = DescriptionParser::new(&options.keywords);

        let mut shots = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            // Line 1 is the header.
            let row = i + 2;
            let number = |column: usize, name: &str| -> Result<f64> {
                let value = record.get(column).unwrap_or_default();
                value.parse().map_err(|_| SurveyError::InvalidNumber {
                    row,
                    column: name.to_string(),
                    value: value.to_string(),
                })
            };
            let description = record.get(index.description).unwrap_or_default().to_string();
            shots.push(Shot {
                number: record.get(index.shot_number).unwrap_or_default().to_string(),
                easting: number(index.easting, &options.columns.easting)?,
                northing: number(index.northing, &options.columns.northing)?,
                elevation: number(index.elevation, &options.columns.elevation)?,
                meaning: parser.parse(&description),
                description,
            });
        }

        let (profiles, cross_sections) = group_by_name(&shots);
        let ungrouped = shots.iter().filter(|s| s.meaning.kind.is_none()).count();
        if ungrouped > 0 {
            debug!("{ungrouped} shots belong to neither a profile nor a cross-section");
        }
        info!(
            "Loaded {} shots: {} cross-sections, {} profiles",
            shots.len(),
            cross_sections.len(),
            profiles.len()
        );

        Ok(Self {
            options,
            shots,
            profiles,
            cross_sections,
        })
    }

    /// Every shot in file order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Longitudinal profile groups.
    pub fn profiles(&self) -> &[ShotGroup] {
        &self.profiles
    }

    /// Cross-section groups.
    pub fn cross_sections(&self) -> &[ShotGroup] {
        &self.cross_sections
    }

    /// Cross-section group with the given name.
    pub fn cross_section(&self, name: &str) -> Option<&ShotGroup> {
        self.cross_sections.iter().find(|g| g.name() == name)
    }

    pub fn keywords(&self) -> &Keywords {
        &self.options.keywords
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.options.unit_system
    }

    /// Builds every cross-section group, stopping at the first failure.
    pub fn cross_section_objects(&self, project: bool) -> Result<Vec<CrossSection>> {
        self.cross_sections
            .iter()
            .map(|group| group.to_cross_section(self.options.unit_system, project))
            .collect()
    }
}

/// Splits shots into profile and cross-section groups keyed by name.
fn group_by_name(shots: &[Shot]) -> (Vec<ShotGroup>, Vec<ShotGroup>) {
    let mut profiles = Vec::new();
    let mut cross_sections = Vec::new();
    let mut seen: HashMap<(ShotKind, &str), usize> = HashMap::new();

    for shot in shots {
        let Some(kind) = shot.meaning.kind else {
            continue;
        };
        let groups = match kind {
            ShotKind::Profile => &mut profiles,
            ShotKind::CrossSection => &mut cross_sections,
        };
        let name = shot.meaning.name.as_str();
        let slot = *seen.entry((kind, name)).or_insert_with(|| {
            groups.push(ShotGroup::new(name.to_string(), kind));
            groups.len() - 1
        });
        groups[slot].push(shot.clone());
    }
    (profiles, cross_sections)
}
