use serde::{Deserialize, Serialize};

/// Envelope every VexDB endpoint wraps its payload in.
///
/// `size` is the number of records the query matched; for the events
/// endpoint it is the only part of the payload the aggregation consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: i32,
    pub size: i32,
    #[serde(default)]
    pub result: Vec<T>,
}

/// One team-profile record from `get_teams`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamInfo {
    pub number: String,
    pub team_name: String,
    pub organisation: String,
    pub city: String,
    pub region: String,
    pub country: String,
}

/// One per-event ranking record from `get_rankings`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RankingRow {
    pub opr: f64,
    pub dpr: f64,
    pub ccwm: f64,
    pub max_score: i32,
    pub rank: i32,
    pub wp: f64,
    pub ap: i32,
    pub sp: i32,
    pub trsp: i32,
}

/// One season-ranking record from `get_season_rankings`.
///
/// The API only ever returns the current record for a team, so the
/// aggregation reads element 0 and never averages these.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeasonRanking {
    pub vrating_rank: i32,
    pub vrating: f64,
}

/// One award record from `get_awards`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Award {
    pub name: String,
}

/// One skills-run record from `get_skills`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkillsRun {
    /// 0 = autonomous, 1 = driver control, 2 = combined
    #[serde(rename = "type")]
    pub run_type: i32,
    pub score: i32,
}

/// Event-entry count for a team's season, taken from the events
/// endpoint's envelope rather than its record list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct EventTally {
    pub size: i32,
}

/// Event metadata resolved from a RobotEvents SKU via `get_events?sku=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfo {
    pub sku: String,
    pub name: String,
    pub season: String,
}

/// One event record from the `get_events?sku=` lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventRecord {
    pub name: String,
    pub season: String,
}

/// The six collections the aggregation engine consumes for one team.
///
/// Assembled in full by the fetch layer before any computation starts,
/// so there is no partially-built state and no required call order.
#[derive(Debug, Clone, Default)]
pub struct RawTeamData {
    pub teams: Vec<TeamInfo>,
    pub rankings: Vec<RankingRow>,
    pub events: EventTally,
    pub season_rankings: Vec<SeasonRanking>,
    pub awards: Vec<Award>,
    pub skills: Vec<SkillsRun>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_info_deserialization() {
        let json = r#"{
            "status": 1,
            "size": 1,
            "result": [{
                "number": "90241B",
                "team_name": "Warren WarBots II",
                "organisation": "Warren High School",
                "city": "Downey",
                "region": "California",
                "country": "United States"
            }]
        }"#;

        let response: ApiResponse<TeamInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, 1);
        assert_eq!(response.size, 1);
        assert_eq!(response.result.len(), 1);
        assert_eq!(response.result[0].number, "90241B");
        assert_eq!(response.result[0].region, "California");
    }

    #[test]
    fn test_ranking_row_deserialization() {
        let json = r#"{
            "opr": 32.5,
            "dpr": 12.25,
            "ccwm": 20.25,
            "max_score": 118,
            "rank": 3,
            "wp": 7.0,
            "ap": 42,
            "sp": 151,
            "trsp": 140
        }"#;

        let row: RankingRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.opr, 32.5);
        assert_eq!(row.max_score, 118);
        assert_eq!(row.wp, 7.0);
        assert_eq!(row.trsp, 140);
    }

    #[test]
    fn test_skills_run_type_field_rename() {
        let json = r#"{"type": 1, "score": 42}"#;
        let run: SkillsRun = serde_json::from_str(json).unwrap();
        assert_eq!(run.run_type, 1);
        assert_eq!(run.score, 42);

        let back = serde_json::to_string(&run).unwrap();
        assert!(back.contains("\"type\":1"));
    }

    #[test]
    fn test_empty_result_array() {
        let json = r#"{"status": 1, "size": 0, "result": []}"#;
        let response: ApiResponse<SeasonRanking> = serde_json::from_str(json).unwrap();
        assert_eq!(response.size, 0);
        assert!(response.result.is_empty());
    }

    #[test]
    fn test_missing_result_defaults_to_empty() {
        // The events endpoint is only read for its size; a missing result
        // list still has to deserialize.
        let json = r#"{"status": 1, "size": 4}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(response.size, 4);
        assert!(response.result.is_empty());
    }

    #[test]
    fn test_event_record_deserialization() {
        let json = r#"{"name": "SoCal Showdown", "season": "In The Zone"}"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "SoCal Showdown");
        assert_eq!(record.season, "In The Zone");
    }

    #[test]
    fn test_raw_team_data_default_is_empty() {
        let raw = RawTeamData::default();
        assert!(raw.teams.is_empty());
        assert!(raw.rankings.is_empty());
        assert_eq!(raw.events.size, 0);
        assert!(raw.season_rankings.is_empty());
        assert!(raw.awards.is_empty());
        assert!(raw.skills.is_empty());
    }
}
