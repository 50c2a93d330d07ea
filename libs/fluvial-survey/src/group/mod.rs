//! # Shot Groups
//!
//! Shots sharing a name form one survey line. Cross-section groups can be
//! turned into [`CrossSection`]s; the feature-tagged shots in a group supply
//! the surveyed bankfull elevation and thalweg.

use config::units::UnitSystem;
use fluvial_geometry::stationing::stationing;
use fluvial_geometry::{CrossSection, CrossSectionOptions, Vec2};
use serde::Serialize;

use crate::error::{Result, SurveyError};
use crate::keywords::{FeatureTag, Keywords, MorphType};
use crate::parser::ShotKind;
use crate::shot::Shot;

/// Feature elevations and positions called out within a group.
///
/// Each value is the mean over every shot carrying the tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupAttributes {
    pub water_surface: Option<f64>,
    pub bankfull: Option<f64>,
    pub top_of_bank: Option<f64>,
    /// Mean (easting, northing) of thalweg shots.
    pub thalweg: Option<Vec2>,
}

/// Shots with the same name, in survey order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotGroup {
    name: String,
    kind: ShotKind,
    shots: Vec<Shot>,
}

impl ShotGroup {
    pub(crate) fn new(name: String, kind: ShotKind) -> Self {
        Self {
            name,
            kind,
            shots: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, shot: Shot) {
        self.shots.push(shot);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShotKind {
        self.kind
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn eastings(&self) -> Vec<f64> {
        self.shots.iter().map(|s| s.easting).collect()
    }

    pub fn northings(&self) -> Vec<f64> {
        self.shots.iter().map(|s| s.northing).collect()
    }

    pub fn elevations(&self) -> Vec<f64> {
        self.shots.iter().map(|s| s.elevation).collect()
    }

    fn tagged(&self, tag: FeatureTag) -> impl Iterator<Item = &Shot> + '_ {
        self.shots.iter().filter(move |s| s.meaning.has_tag(tag))
    }

    fn mean_elevation(&self, tag: FeatureTag) -> Option<f64> {
        mean(self.tagged(tag).map(|s| s.elevation))
    }

    /// Mean feature elevations and thalweg position.
    pub fn attributes(&self) -> GroupAttributes {
        let thalweg_shots: Vec<Vec2> = self.tagged(FeatureTag::Thalweg).map(Shot::position).collect();
        let thalweg = (!thalweg_shots.is_empty())
            .then(|| thalweg_shots.iter().copied().sum::<Vec2>() / thalweg_shots.len() as f64);
        GroupAttributes {
            water_surface: self.mean_elevation(FeatureTag::WaterSurface),
            bankfull: self.mean_elevation(FeatureTag::Bankfull),
            top_of_bank: self.mean_elevation(FeatureTag::TopOfBank),
            thalweg,
        }
    }

    /// Guesses the morphology from the group name.
    ///
    /// When several morph keywords appear in the name the last in
    /// riffle, run, pool, glide order wins.
    pub fn morph_type(&self, keywords: &Keywords) -> Option<MorphType> {
        MorphType::ALL
            .into_iter()
            .filter(|&morph| {
                keywords
                    .morph_keyword(morph)
                    .is_some_and(|k| self.name.contains(k))
            })
            .last()
    }

    /// Builds a cross-section from the group's shots.
    ///
    /// The surveyed bankfull elevation is applied when present, and the
    /// thalweg station is the mean station of thalweg-tagged shots.
    pub fn to_cross_section(&self, unit_system: UnitSystem, project: bool) -> Result<CrossSection> {
        let geometry_error = |source| SurveyError::Geometry {
            name: self.name.clone(),
            source,
        };
        let eastings = self.eastings();
        let northings = self.northings();

        let stations = stationing(&eastings, &northings, project).map_err(geometry_error)?;
        let thalweg_station = mean(
            self.shots
                .iter()
                .zip(&stations)
                .filter(|(shot, _)| shot.meaning.has_tag(FeatureTag::Thalweg))
                .map(|(_, &station)| station),
        );

        let options = CrossSectionOptions {
            name: Some(self.name.clone()),
            unit_system,
            project,
            bankfull_elevation: self.mean_elevation(FeatureTag::Bankfull),
            thalweg_station,
            ..Default::default()
        };
        CrossSection::new(&eastings, &northings, &self.elevations(), options).map_err(geometry_error)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
