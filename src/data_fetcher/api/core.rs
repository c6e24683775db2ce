use reqwest::Client;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch;
use super::urls::{
    build_awards_url, build_event_lookup_url, build_event_teams_url, build_events_url,
    build_rankings_url, build_season_rankings_url, build_skills_url, build_teams_url,
};
use crate::data_fetcher::models::{
    ApiResponse, Award, EventInfo, EventRecord, EventTally, RankingRow, RawTeamData, SeasonRanking,
    SkillsRun, TeamInfo,
};
use crate::error::AppError;

/// Fetches the six statistic collections for one team and assembles them
/// into a [`RawTeamData`] value.
///
/// The six requests are independent, so they are issued concurrently; the
/// returned value is only constructed once all of them succeed. An empty
/// collection is a valid outcome here: emptiness is the aggregation
/// engine's availability signal, not a fetch error.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `api_domain` - Base API domain from the configuration
/// * `team` - Team number, e.g. "90241B"
/// * `season` - Season name, e.g. "In The Zone"
#[instrument(skip(client, api_domain))]
pub async fn fetch_team_data(
    client: &Client,
    api_domain: &str,
    team: &str,
    season: &str,
) -> Result<RawTeamData, AppError> {
    info!("Fetching all collections for team {team}");

    let teams_url = build_teams_url(api_domain, team);
    let rankings_url = build_rankings_url(api_domain, team, season);
    let events_url = build_events_url(api_domain, team, season);
    let season_rankings_url = build_season_rankings_url(api_domain, team, season);
    let awards_url = build_awards_url(api_domain, team, season);
    let skills_url = build_skills_url(api_domain, team, season);

    let (teams, rankings, events, season_rankings, awards, skills) = tokio::try_join!(
        fetch::<ApiResponse<TeamInfo>>(client, &teams_url),
        fetch::<ApiResponse<RankingRow>>(client, &rankings_url),
        fetch::<ApiResponse<serde_json::Value>>(client, &events_url),
        fetch::<ApiResponse<SeasonRanking>>(client, &season_rankings_url),
        fetch::<ApiResponse<Award>>(client, &awards_url),
        fetch::<ApiResponse<SkillsRun>>(client, &skills_url),
    )?;

    debug!(
        "Team {team}: {} ranking rows, {} events, {} awards, {} skills runs",
        rankings.result.len(),
        events.size,
        awards.result.len(),
        skills.result.len()
    );

    Ok(RawTeamData {
        teams: teams.result,
        rankings: rankings.result,
        events: EventTally { size: events.size },
        season_rankings: season_rankings.result,
        awards: awards.result,
        skills: skills.result,
    })
}

/// Resolves a RobotEvents SKU into event metadata (name and season).
///
/// # Errors
/// * `AppError::EventNotFound` - The SKU matched no event
#[instrument(skip(client, api_domain))]
pub async fn fetch_event_info(
    client: &Client,
    api_domain: &str,
    sku: &str,
) -> Result<EventInfo, AppError> {
    let url = build_event_lookup_url(api_domain, sku);
    let response: ApiResponse<EventRecord> = fetch(client, &url).await?;

    let record = response
        .result
        .into_iter()
        .next()
        .ok_or_else(|| AppError::event_not_found(sku))?;

    Ok(EventInfo {
        sku: sku.to_string(),
        name: record.name,
        season: record.season,
    })
}

/// Fetches the list of team numbers registered for an event.
///
/// Team lists are published on VexDB ahead of the event; an empty list is
/// returned as-is and left to the caller to report.
#[instrument(skip(client, api_domain))]
pub async fn fetch_event_teams(
    client: &Client,
    api_domain: &str,
    sku: &str,
) -> Result<Vec<String>, AppError> {
    let url = build_event_teams_url(api_domain, sku);
    let response: ApiResponse<TeamInfo> = fetch(client, &url).await?;

    Ok(response.result.into_iter().map(|t| t.number).collect())
}
