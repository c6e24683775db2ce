//! Builds spreadsheet-ready display rows from aggregated team statistics

use crate::constants::{NOT_FOUND_SENTINEL, TEAM_LINK_BASE};
use crate::summary::{FieldAvailability, TeamSummary};

/// Header labels, one per report column, in writing order.
pub const COLUMN_HEADERS: [&str; 20] = [
    "Team",
    "Team Name",
    "Organization",
    "Location",
    "VexDB Link",
    "Average OPR",
    "Average DPR",
    "Average CCWM",
    "Average Max Score",
    "Average Rank",
    "Average WP's",
    "Average AP's",
    "Average SP's",
    "Average TRSP's",
    "Vrating Rank",
    "Vrating",
    "Average Skills Score(Auton)",
    "Average Skills Score(Robot)",
    "Average Skills Score(Combined)",
    "Total Events This Season",
];

/// Public VexDB page for a team.
pub fn team_link(number: &str) -> String {
    format!("{TEAM_LINK_BASE}/{number}")
}

/// The header row for a report.
pub fn build_header_row() -> Vec<String> {
    COLUMN_HEADERS.iter().map(|h| h.to_string()).collect()
}

/// Builds the display row for one team.
///
/// Every metric column whose availability flag is false renders the
/// `NOT_FOUND` sentinel instead of the zeroed stored value. The events
/// count carries no availability flag and is always rendered numerically.
pub fn build_team_row(summary: &TeamSummary, available: &FieldAvailability) -> Vec<String> {
    vec![
        summary.number.clone(),
        summary.team_name.clone(),
        summary.organization.clone(),
        summary.location.clone(),
        team_link(&summary.number),
        real_cell(summary.avg_opr, available.opr),
        real_cell(summary.avg_dpr, available.dpr),
        real_cell(summary.avg_ccwm, available.ccwm),
        int_cell(summary.avg_max_score, available.max_score),
        int_cell(summary.avg_rank, available.rank),
        int_cell(summary.avg_wp, available.wp),
        int_cell(summary.avg_ap, available.ap),
        int_cell(summary.avg_sp, available.sp),
        int_cell(summary.avg_trsp, available.trsp),
        int_cell(summary.vrating_rank, available.vrating_rank),
        real_cell(summary.vrating, available.vrating),
        int_cell(summary.avg_skills_auton, available.skills_auton),
        int_cell(summary.avg_skills_robot, available.skills_robot),
        int_cell(summary.avg_skills_combined, available.skills_combined),
        summary.num_events.to_string(),
    ]
}

fn real_cell(value: f64, available: bool) -> String {
    if available {
        value.to_string()
    } else {
        NOT_FOUND_SENTINEL.to_string()
    }
}

fn int_cell(value: i32, available: bool) -> String {
    if available {
        value.to_string()
    } else {
        NOT_FOUND_SENTINEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_summary() -> TeamSummary {
        TeamSummary {
            number: "90241B".to_string(),
            team_name: "Warren WarBots II".to_string(),
            organization: "Warren High School".to_string(),
            location: "Downey, California, United States".to_string(),
            avg_opr: 15.5,
            avg_dpr: 7.25,
            avg_ccwm: 8.25,
            avg_max_score: 110,
            avg_rank: 3,
            avg_wp: 7,
            avg_ap: 35,
            avg_sp: 142,
            avg_trsp: 130,
            num_events: 5,
            vrating_rank: 12,
            vrating: 78.4,
            award_counts: HashMap::new(),
            avg_skills_auton: 3,
            avg_skills_robot: 16,
            avg_skills_combined: 0,
        }
    }

    #[test]
    fn test_row_matches_header_width() {
        let row = build_team_row(&test_summary(), &FieldAvailability::default());
        assert_eq!(row.len(), COLUMN_HEADERS.len());
        assert_eq!(build_header_row().len(), COLUMN_HEADERS.len());
    }

    #[test]
    fn test_row_contents_when_all_available() {
        let row = build_team_row(&test_summary(), &FieldAvailability::default());

        assert_eq!(row[0], "90241B");
        assert_eq!(row[1], "Warren WarBots II");
        assert_eq!(row[2], "Warren High School");
        assert_eq!(row[3], "Downey, California, United States");
        assert_eq!(row[4], "https://vexdb.io/teams/view/90241B");
        assert_eq!(row[5], "15.5");
        assert_eq!(row[8], "110");
        assert_eq!(row[10], "7");
        assert_eq!(row[14], "12");
        assert_eq!(row[15], "78.4");
        assert_eq!(row[19], "5");
    }

    #[test]
    fn test_unavailable_metrics_render_sentinel() {
        let available = FieldAvailability {
            opr: false,
            max_score: false,
            vrating: false,
            skills_robot: false,
            ..FieldAvailability::default()
        };

        let row = build_team_row(&test_summary(), &available);

        assert_eq!(row[5], NOT_FOUND_SENTINEL);
        assert_eq!(row[8], NOT_FOUND_SENTINEL);
        assert_eq!(row[15], NOT_FOUND_SENTINEL);
        assert_eq!(row[17], NOT_FOUND_SENTINEL);
        // Neighbors keep their values
        assert_eq!(row[6], "7.25");
        assert_eq!(row[9], "3");
    }

    #[test]
    fn test_sentinel_overrides_zeroed_value() {
        let mut summary = test_summary();
        summary.avg_rank = 0;
        let available = FieldAvailability {
            rank: false,
            ..FieldAvailability::default()
        };

        let row = build_team_row(&summary, &available);
        assert_eq!(row[9], NOT_FOUND_SENTINEL);
    }

    #[test]
    fn test_events_count_is_always_numeric() {
        // Every metric flag off: the events column still renders a number
        let available = FieldAvailability {
            opr: false,
            dpr: false,
            ccwm: false,
            max_score: false,
            rank: false,
            wp: false,
            ap: false,
            sp: false,
            trsp: false,
            skills_auton: false,
            skills_robot: false,
            skills_combined: false,
            vrating_rank: false,
            vrating: false,
            awards: false,
        };

        let row = build_team_row(&test_summary(), &available);
        assert_eq!(row[19], "5");
    }

    #[test]
    fn test_team_link() {
        assert_eq!(team_link("90241B"), "https://vexdb.io/teams/view/90241B");
    }
}
