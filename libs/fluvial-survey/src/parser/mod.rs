//! # Description Parser
//!
//! Splits a shot description into its parts:
//!
//! ```text
//! xs2ri-bkf-thw_left pin
//! ^^^^^ ^^^^^^^ ^^^^^^^^
//! name  descriptors  comment
//! ```
//!
//! The name decides whether a shot belongs to a profile or a cross-section;
//! every descriptor is matched against every keyword by substring.

use serde::Serialize;

use crate::keywords::{FeatureTag, Keywords};

/// Which survey line a shot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    Profile,
    CrossSection,
}

/// Interpreted shot description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotMeaning {
    /// `None` when the name matches neither line keyword.
    pub kind: Option<ShotKind>,
    pub name: String,
    pub tags: Vec<FeatureTag>,
    pub comment: Option<String>,
}

impl ShotMeaning {
    pub fn has_tag(&self, tag: FeatureTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Parses descriptions against a keyword set.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionParser<'a> {
    keywords: &'a Keywords,
}

impl<'a> DescriptionParser<'a> {
    pub fn new(keywords: &'a Keywords) -> Self {
        Self { keywords }
    }

    /// Interprets one description.
    ///
    /// # Examples
    /// ```
    /// use fluvial_survey::keywords::{FeatureTag, Keywords};
    /// use fluvial_survey::parser::{DescriptionParser, ShotKind};
    ///
    /// let keywords = Keywords::default();
    /// let meaning = DescriptionParser::new(&keywords).parse("xs1-bkf_left pin");
    /// assert_eq!(meaning.kind, Some(ShotKind::CrossSection));
    /// assert_eq!(meaning.name, "xs1");
    /// assert_eq!(meaning.tags, vec![FeatureTag::Bankfull]);
    /// assert_eq!(meaning.comment.as_deref(), Some("left pin"));
    /// ```
    pub fn parse(&self, description: &str) -> ShotMeaning {
        let (body, comment) = match description.split_once(self.keywords.comment_char) {
            Some((body, comment)) => (body, Some(comment.trim().to_string())),
            None => (description, None),
        };

        let mut pieces = body.split(self.keywords.break_char).map(str::trim);
        let name = pieces.next().unwrap_or_default().to_string();

        let kind = if name.contains(self.keywords.profile.as_str()) {
            Some(ShotKind::Profile)
        } else if name.contains(self.keywords.cross_section.as_str()) {
            Some(ShotKind::CrossSection)
        } else {
            None
        };

        let features = self.keywords.features();
        let mut tags = Vec::new();
        for descriptor in pieces.filter(|d| !d.is_empty()) {
            for &(tag, keyword) in &features {
                if descriptor.contains(keyword) && !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }

        ShotMeaning {
            kind,
            name,
            tags,
            comment,
        }
    }
}

#[cfg(test)]
mod tests;
