//! # Bankfull Elevation Search
//!
//! Finds the water elevation at which a chosen statistic reaches a goal,
//! e.g. the elevation that produces a 6 m bankfull width.
//!
//! ## Algorithm
//!
//! Bisection over elevation with adaptive expansion:
//!
//! 1. Start with `low` at the search floor and `high` at the top of the
//!    survey. If a starting guess is supplied, evaluate it first.
//! 2. Evaluate the statistic at the candidate. Within tolerance: done.
//! 3. Too large: the candidate becomes `high` and an upper bound is known.
//! 4. Too small: the candidate becomes `low`. While no upper bound is known,
//!    the height of `high` above the floor doubles so goals beyond the
//!    surveyed banks can still be reached; past the expansion cap the
//!    search stops.
//!
//! The search never mutates anything: statistics at each candidate come from
//! the supplied evaluator, and the caller decides whether to keep the result.
//! The statistic is assumed to increase monotonically with elevation, which
//! is why only the variants of [`BankfullTarget`] can be searched.

use std::fmt;
use std::str::FromStr;

use config::constants::{default_tolerance, SearchConfig};
use serde::{Deserialize, Serialize};

use crate::error::{ChannelError, Result};
use crate::hydraulics::HydraulicStats;

/// Statistics that grow monotonically with water elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankfullTarget {
    /// Cross-sectional flow area.
    Area,
    /// Top width.
    Width,
    /// Depth at the thalweg.
    MaxDepth,
    /// Wetted perimeter.
    WettedPerimeter,
    /// Manning discharge (needs slope and roughness).
    Discharge,
}

impl BankfullTarget {
    /// Every searchable statistic.
    pub const ALL: [BankfullTarget; 5] = [
        BankfullTarget::Area,
        BankfullTarget::Width,
        BankfullTarget::MaxDepth,
        BankfullTarget::WettedPerimeter,
        BankfullTarget::Discharge,
    ];

    /// Snake-case name of the statistic.
    pub fn name(self) -> &'static str {
        match self {
            BankfullTarget::Area => "area",
            BankfullTarget::Width => "width",
            BankfullTarget::MaxDepth => "max_depth",
            BankfullTarget::WettedPerimeter => "wetted_perimeter",
            BankfullTarget::Discharge => "discharge",
        }
    }

    /// Reads this statistic from a set of results.
    ///
    /// `None` only for discharge when flow parameters are missing.
    pub fn value(self, stats: &HydraulicStats) -> Option<f64> {
        match self {
            BankfullTarget::Area => Some(stats.area),
            BankfullTarget::Width => Some(stats.width),
            BankfullTarget::MaxDepth => Some(stats.max_depth),
            BankfullTarget::WettedPerimeter => Some(stats.wetted_perimeter),
            BankfullTarget::Discharge => stats.discharge,
        }
    }
}

impl fmt::Display for BankfullTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BankfullTarget {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        BankfullTarget::ALL
            .into_iter()
            .find(|target| target.name() == wanted)
            .ok_or_else(|| {
                ChannelError::invalid_parameter(
                    "target",
                    format!("'{s}' is not a searchable statistic"),
                )
            })
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The goal was reached within tolerance.
    Converged,
    /// The upper bound grew past the expansion cap without reaching the goal.
    ExpansionCapReached,
    /// The iteration budget ran out.
    IterationLimit,
}

/// Result of a bankfull search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Statistic that was searched.
    pub target: BankfullTarget,
    /// Value the search aimed for.
    pub goal: f64,
    /// Converged elevation, or the closest candidate when not converged.
    pub elevation: f64,
    /// Statistic at `elevation`.
    pub value: f64,
    /// Candidate elevations evaluated.
    pub iterations: usize,
    /// How the search ended.
    pub status: SearchStatus,
}

impl SearchOutcome {
    /// True if the goal was reached within tolerance.
    pub fn is_converged(&self) -> bool {
        self.status == SearchStatus::Converged
    }

    /// The elevation to use, if any.
    ///
    /// A failed search yields its best candidate only when `accept_failed`.
    pub fn elevation_if(&self, accept_failed: bool) -> Option<f64> {
        (self.is_converged() || accept_failed).then_some(self.elevation)
    }

    /// Converts a failed search into `NonConvergence`.
    pub fn into_result(self) -> Result<f64> {
        if self.is_converged() {
            Ok(self.elevation)
        } else {
            Err(ChannelError::NonConvergence {
                target: self.target.to_string(),
                goal: self.goal,
                iterations: self.iterations,
                best_elevation: self.elevation,
            })
        }
    }
}

/// Caller-tunable search settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchOptions {
    /// Absolute tolerance on the statistic; defaults to goal / 1000.
    pub tolerance: Option<f64>,
    /// Iteration and expansion limits.
    pub config: SearchConfig,
}

/// Elevation range the search starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBounds {
    /// Lowest elevation considered; candidates always lie above it.
    pub floor: f64,
    /// Initial upper bound, normally the highest surveyed shot.
    pub top: f64,
    /// Elevation evaluated before bisecting, e.g. a known bankfull elevation.
    pub initial_guess: Option<f64>,
}

/// Searches for the elevation where `target` reaches `goal`.
///
/// `evaluate` computes statistics at a candidate elevation; its errors abort
/// the search.
///
/// While no candidate has overshot the goal, the upper bound doubles its
/// height above `bounds.floor`. Expansion stops with
/// [`SearchStatus::ExpansionCapReached`] once the bound reaches
/// `floor + config.expansion_cap * (top - floor)`. The cap is relative to
/// the channel depth, not a multiple of the absolute top elevation, so
/// surveys on a high benchmark datum expand no further than low ones.
///
/// # Errors
///
/// - `InvalidParameter` for a non-positive goal or tolerance, empty bounds,
///   or a discharge target without flow parameters
/// - any error returned by `evaluate`
pub fn search_bankfull<F>(
    mut evaluate: F,
    bounds: SearchBounds,
    target: BankfullTarget,
    goal: f64,
    options: &SearchOptions,
) -> Result<SearchOutcome>
where
    F: FnMut(f64) -> Result<HydraulicStats>,
{
    if !goal.is_finite() || goal <= 0.0 {
        return Err(ChannelError::invalid_parameter(
            "goal",
            format!("must be finite and positive, got {goal}"),
        ));
    }
    let tolerance = options.tolerance.unwrap_or_else(|| default_tolerance(goal));
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ChannelError::invalid_parameter(
            "tolerance",
            format!("must be finite and positive, got {tolerance}"),
        ));
    }
    let SearchBounds {
        floor,
        top,
        initial_guess,
    } = bounds;
    if !(top > floor) {
        return Err(ChannelError::invalid_parameter(
            "bounds",
            format!("top {top} must lie above floor {floor}"),
        ));
    }

    let ceiling = floor + options.config.expansion_cap * (top - floor);
    let (mut low, mut high) = (floor, top);
    let mut upper_found = false;
    let mut candidate = match initial_guess {
        Some(guess) if guess.is_finite() && guess > floor => guess,
        _ => 0.5 * (low + high),
    };

    let mut best: Option<(f64, f64)> = None;
    let mut status = SearchStatus::IterationLimit;
    let mut iterations = 0;

    while iterations < options.config.max_iterations {
        iterations += 1;
        let stats = evaluate(candidate)?;
        let value = target.value(&stats).ok_or_else(|| {
            ChannelError::invalid_parameter(
                "target",
                format!("{target} needs a water slope and roughness"),
            )
        })?;

        if best.map_or(true, |(_, v)| (value - goal).abs() < (v - goal).abs()) {
            best = Some((candidate, value));
        }
        if (value - goal).abs() <= tolerance {
            best = Some((candidate, value));
            status = SearchStatus::Converged;
            break;
        }

        if value > goal {
            high = candidate;
            upper_found = true;
        } else {
            low = candidate;
            if !upper_found {
                high = floor + 2.0 * (high.max(candidate) - floor);
                if high >= ceiling {
                    status = SearchStatus::ExpansionCapReached;
                    break;
                }
            }
        }
        candidate = 0.5 * (low + high);
    }

    let (elevation, value) = best.unwrap_or((candidate, f64::NAN));
    match status {
        SearchStatus::Converged => {
            log::debug!("{target} = {goal} converged at {elevation} in {iterations} iterations")
        }
        _ => log::debug!(
            "{target} = {goal} did not converge in {iterations} iterations ({status:?}); best {elevation}"
        ),
    }

    Ok(SearchOutcome {
        target,
        goal,
        elevation,
        value,
        iterations,
        status,
    })
}

#[cfg(test)]
mod tests;
