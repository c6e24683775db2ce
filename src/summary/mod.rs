//! Per-team statistics aggregation
//!
//! Reduces the six raw VexDB collections for one team into a
//! [`TeamSummary`] plus a [`FieldAvailability`] record. This is pure
//! computation: no I/O, no shared state, and both outputs are owned by
//! the caller of [`aggregate`].

use std::collections::HashMap;

use crate::constants::{AWARD_NAME_SUFFIX, skills_type};
use crate::data_fetcher::models::{RankingRow, RawTeamData, SkillsRun};
use crate::error::AppError;

/// Compiled statistics for one team, immutable once built.
///
/// Real-valued metrics keep full precision; integer metrics are averaged
/// with truncating division, matching how the figures have always been
/// published.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    /// Team number, e.g. "90241B"
    pub number: String,
    /// Display name, e.g. "Warren WarBots II"
    pub team_name: String,
    pub organization: String,
    /// "City, Region, Country", or "City, Country" when the region is empty
    pub location: String,

    pub avg_opr: f64,
    pub avg_dpr: f64,
    pub avg_ccwm: f64,
    pub avg_max_score: i32,
    pub avg_rank: i32,
    pub avg_wp: i32,
    pub avg_ap: i32,
    pub avg_sp: i32,
    pub avg_trsp: i32,

    /// Number of events the team entered this season
    pub num_events: i32,

    pub vrating_rank: i32,
    pub vrating: f64,

    /// Occurrence count per award name, suffix-stripped
    pub award_counts: HashMap<String, u32>,

    pub avg_skills_auton: i32,
    pub avg_skills_robot: i32,
    pub avg_skills_combined: i32,
}

/// Records, per metric, whether the backing collection had any data for
/// this team. One flag per metric, so the "exactly one entry per metric"
/// invariant holds by construction.
///
/// A fresh value starts all-true; [`aggregate`] clears exactly the flags
/// whose source collection was empty. Scoped to a single aggregation
/// call; nothing here is shared between teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAvailability {
    pub opr: bool,
    pub dpr: bool,
    pub ccwm: bool,
    pub max_score: bool,
    pub rank: bool,
    pub wp: bool,
    pub ap: bool,
    pub sp: bool,
    pub trsp: bool,
    pub skills_auton: bool,
    pub skills_robot: bool,
    pub skills_combined: bool,
    pub vrating_rank: bool,
    pub vrating: bool,
    pub awards: bool,
}

impl Default for FieldAvailability {
    fn default() -> Self {
        FieldAvailability {
            opr: true,
            dpr: true,
            ccwm: true,
            max_score: true,
            rank: true,
            wp: true,
            ap: true,
            sp: true,
            trsp: true,
            skills_auton: true,
            skills_robot: true,
            skills_combined: true,
            vrating_rank: true,
            vrating: true,
            awards: true,
        }
    }
}

/// Runs every reduction for one team.
///
/// `team` is the number the data was requested for; it only appears in
/// the error when the profile lookup came back empty, since the summary
/// itself takes its identity from the API record.
///
/// # Errors
/// * `AppError::MissingIdentity` - `teams` was empty. This is the one
///   collection that cannot fall back to a zero value; every other empty
///   collection just clears its availability flags.
pub fn aggregate(
    team: &str,
    raw: &RawTeamData,
) -> Result<(TeamSummary, FieldAvailability), AppError> {
    let profile = raw
        .teams
        .first()
        .ok_or_else(|| AppError::missing_identity(team))?;

    let mut available = FieldAvailability::default();

    // Each ranking metric is reduced in its own pass so that no metric's
    // accumulator depends on another's.
    let avg_opr = avg_real(&raw.rankings, |r| r.opr);
    let avg_dpr = avg_real(&raw.rankings, |r| r.dpr);
    let avg_ccwm = avg_real(&raw.rankings, |r| r.ccwm);
    let avg_max_score = avg_int(&raw.rankings, |r| r.max_score);
    let avg_rank = avg_int(&raw.rankings, |r| r.rank);
    let avg_wp = avg_real_truncated(&raw.rankings, |r| r.wp);
    let avg_ap = avg_int(&raw.rankings, |r| r.ap);
    let avg_sp = avg_int(&raw.rankings, |r| r.sp);
    let avg_trsp = avg_int(&raw.rankings, |r| r.trsp);

    if raw.rankings.is_empty() {
        available.opr = false;
        available.dpr = false;
        available.ccwm = false;
        available.max_score = false;
        available.rank = false;
        available.wp = false;
        available.ap = false;
        available.sp = false;
        available.trsp = false;
    }

    let (vrating_rank, vrating) = match raw.season_rankings.first() {
        Some(season) => (season.vrating_rank, season.vrating),
        None => {
            available.vrating_rank = false;
            available.vrating = false;
            (0, 0.0)
        }
    };

    let award_counts = if raw.awards.is_empty() {
        available.awards = false;
        HashMap::new()
    } else {
        count_awards(raw)
    };

    let avg_skills_auton = avg_skills_score(&raw.skills, skills_type::AUTON);
    let avg_skills_robot = avg_skills_score(&raw.skills, skills_type::ROBOT);
    let avg_skills_combined = avg_skills_score(&raw.skills, skills_type::COMBINED);

    if raw.skills.is_empty() {
        available.skills_auton = false;
        available.skills_robot = false;
        available.skills_combined = false;
    }

    let summary = TeamSummary {
        number: profile.number.clone(),
        team_name: profile.team_name.clone(),
        organization: profile.organisation.clone(),
        location: format_location(&profile.city, &profile.region, &profile.country),
        avg_opr,
        avg_dpr,
        avg_ccwm,
        avg_max_score,
        avg_rank,
        avg_wp,
        avg_ap,
        avg_sp,
        avg_trsp,
        num_events: raw.events.size,
        vrating_rank,
        vrating,
        award_counts,
        avg_skills_auton,
        avg_skills_robot,
        avg_skills_combined,
    };

    Ok((summary, available))
}

/// Formats a team's location, skipping the region when the API left it
/// blank (common outside the US).
pub fn format_location(city: &str, region: &str, country: &str) -> String {
    if region.is_empty() {
        format!("{city}, {country}")
    } else {
        format!("{city}, {region}, {country}")
    }
}

/// Unweighted arithmetic mean of a real-valued ranking field.
/// Zero when there are no ranking rows.
fn avg_real(rankings: &[RankingRow], field: impl Fn(&RankingRow) -> f64) -> f64 {
    if rankings.is_empty() {
        return 0.0;
    }
    let total: f64 = rankings.iter().map(&field).sum();
    total / rankings.len() as f64
}

/// Truncating mean of an integer-valued ranking field.
/// Zero when there are no ranking rows.
fn avg_int(rankings: &[RankingRow], field: impl Fn(&RankingRow) -> i32) -> i32 {
    if rankings.is_empty() {
        return 0;
    }
    let total: i32 = rankings.iter().map(&field).sum();
    total / rankings.len() as i32
}

/// Truncating mean of a real-valued field reported as a whole number.
///
/// Win points arrive as reals but are published as an integer average:
/// the sum is truncated before dividing, matching the long-standing
/// published figures.
fn avg_real_truncated(rankings: &[RankingRow], field: impl Fn(&RankingRow) -> f64) -> i32 {
    if rankings.is_empty() {
        return 0;
    }
    let total: f64 = rankings.iter().map(&field).sum();
    total as i32 / rankings.len() as i32
}

/// Mean skills score for one run type.
///
/// The divisor is the total number of skills runs, not the number of runs
/// matching `run_type`. That is how these figures have always been
/// published upstream, so it is preserved as-is.
fn avg_skills_score(skills: &[SkillsRun], run_type: i32) -> i32 {
    if skills.is_empty() {
        return 0;
    }
    let total: i32 = skills
        .iter()
        .filter(|run| run.run_type == run_type)
        .map(|run| run.score)
        .sum();
    total / skills.len() as i32
}

/// Counts awards by name, with the fixed program suffix stripped first.
///
/// The operation is commutative, so iteration order never affects the
/// resulting counts.
fn count_awards(raw: &RawTeamData) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for award in &raw.awards {
        let name = award.name.replace(AWARD_NAME_SUFFIX, "");
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}
