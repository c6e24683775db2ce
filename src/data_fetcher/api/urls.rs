//! URL building utilities for the VexDB API endpoints

/// Escapes a season name for use in a query string.
///
/// Season names are human-readable ("In The Zone"); the API expects
/// spaces as `%20`.
fn escape_season(season: &str) -> String {
    season.replace(' ', "%20")
}

/// Builds the team-profile URL for a team.
///
/// # Example
/// ```
/// use vexinfo::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.vexdb.io", "90241B");
/// assert_eq!(url, "https://api.vexdb.io/v1/get_teams?team=90241B");
/// ```
pub fn build_teams_url(api_domain: &str, team: &str) -> String {
    format!("{api_domain}/v1/get_teams?team={team}")
}

/// Builds the per-event rankings URL for a team and season.
///
/// # Example
/// ```
/// use vexinfo::data_fetcher::api::build_rankings_url;
///
/// let url = build_rankings_url("https://api.vexdb.io", "90241B", "In The Zone");
/// assert_eq!(
///     url,
///     "https://api.vexdb.io/v1/get_rankings?team=90241B&season=In%20The%20Zone"
/// );
/// ```
pub fn build_rankings_url(api_domain: &str, team: &str, season: &str) -> String {
    format!(
        "{api_domain}/v1/get_rankings?team={team}&season={}",
        escape_season(season)
    )
}

/// Builds the events URL for a team and season.
pub fn build_events_url(api_domain: &str, team: &str, season: &str) -> String {
    format!(
        "{api_domain}/v1/get_events?team={team}&season={}",
        escape_season(season)
    )
}

/// Builds the season-rankings URL for a team and season.
pub fn build_season_rankings_url(api_domain: &str, team: &str, season: &str) -> String {
    format!(
        "{api_domain}/v1/get_season_rankings?team={team}&season={}",
        escape_season(season)
    )
}

/// Builds the awards URL for a team and season.
pub fn build_awards_url(api_domain: &str, team: &str, season: &str) -> String {
    format!(
        "{api_domain}/v1/get_awards?team={team}&season={}",
        escape_season(season)
    )
}

/// Builds the skills URL for a team and season.
pub fn build_skills_url(api_domain: &str, team: &str, season: &str) -> String {
    format!(
        "{api_domain}/v1/get_skills?team={team}&season={}",
        escape_season(season)
    )
}

/// Builds the event-lookup URL for a RobotEvents SKU.
pub fn build_event_lookup_url(api_domain: &str, sku: &str) -> String {
    format!("{api_domain}/v1/get_events?sku={sku}")
}

/// Builds the event team-list URL for a RobotEvents SKU.
pub fn build_event_teams_url(api_domain: &str, sku: &str) -> String {
    format!("{api_domain}/v1/get_teams?sku={sku}")
}
