use std::path::Path;
use std::time::Instant;

use chrono::Local;
use reqwest::Client;
use tracing::{info, warn};

use crate::cli::Args;
use crate::config::Config;
use crate::constants;
use crate::data_fetcher::api::{
    create_http_client_with_timeout, fetch_event_info, fetch_event_teams, fetch_team_data,
};
use crate::error::AppError;
use crate::sheet::{CsvSink, RowSink, build_header_row, build_team_row};
use crate::summary::aggregate;

/// What one invocation reports on: a title for the log, the season to
/// pull statistics for, and the teams entered.
struct ReportPlan {
    title: String,
    season: String,
    teams: Vec<String>,
}

/// Runs one report generation end to end.
///
/// Resolves the event (or uses the explicit team list), then fetches,
/// aggregates, and writes one row per team, strictly sequentially. A team
/// whose profile lookup comes back empty is skipped with a warning; any
/// transport error aborts the run.
pub async fn run(args: &Args) -> Result<(), AppError> {
    info!(
        "{} - Building report",
        Local::now().format("%Y/%m/%d %H:%M:%S")
    );

    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let plan = resolve_plan(args, &client, &config.api_domain).await?;
    info!(
        "{}: {} teams, season \"{}\"",
        plan.title,
        plan.teams.len(),
        plan.season
    );

    if plan.teams.is_empty() {
        warn!("No teams to report on; writing header-only report");
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| constants::DEFAULT_OUTPUT_PATH.to_string());
    let mut sink = CsvSink::create(Path::new(&output))?;
    sink.write_row(&build_header_row())?;

    let run_start = Instant::now();
    let mut written = 0usize;
    for team in &plan.teams {
        let team_start = Instant::now();

        let raw = fetch_team_data(&client, &config.api_domain, team, &plan.season).await?;
        match aggregate(team, &raw) {
            Ok((summary, available)) => {
                sink.write_row(&build_team_row(&summary, &available))?;
                written += 1;
                info!(
                    "{} written ({} ms)",
                    summary.number,
                    team_start.elapsed().as_millis()
                );
            }
            Err(AppError::MissingIdentity { team }) => {
                warn!("Skipping {team}: no profile on record");
            }
            Err(e) => return Err(e),
        }
    }
    sink.finish()?;

    info!(
        "Report written to {} - {} of {} teams in {:.2} s",
        output,
        written,
        plan.teams.len(),
        run_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Decides what to report on from the CLI arguments.
///
/// An event link wins: its SKU resolves to the event's name, season, and
/// published team list. Otherwise an explicit team list plus season is
/// required.
async fn resolve_plan(
    args: &Args,
    client: &Client,
    api_domain: &str,
) -> Result<ReportPlan, AppError> {
    if let Some(link) = &args.event_link {
        let sku = sku_from_link(link)?;
        let info = fetch_event_info(client, api_domain, &sku).await?;
        let teams = fetch_event_teams(client, api_domain, &sku).await?;
        // An explicit --season overrides the event's own
        let season = args.season.clone().unwrap_or(info.season);
        return Ok(ReportPlan {
            title: info.name,
            season,
            teams,
        });
    }

    if args.teams.is_empty() {
        return Err(AppError::config_error(
            "Nothing to report on: pass --event <link> or --team <number> --season <season>",
        ));
    }
    let season = args.season.clone().ok_or_else(|| {
        AppError::config_error("--season is required when teams are given explicitly")
    })?;

    Ok(ReportPlan {
        title: format!("{} team(s)", args.teams.len()),
        season,
        teams: args.teams.clone(),
    })
}

/// Extracts the event SKU from a RobotEvents page link.
///
/// The SKU is the last path segment with its `.html` suffix removed; a
/// bare SKU passed instead of a link is accepted unchanged.
fn sku_from_link(link: &str) -> Result<String, AppError> {
    let trimmed = link.trim_end_matches('/');
    let candidate = match trimmed.rsplit_once('/') {
        Some((_, last)) => last,
        None => trimmed,
    };
    let sku = candidate.trim_end_matches(".html");

    // A host name or empty segment is not a SKU
    if sku.is_empty() || sku.contains(':') || sku.contains('.') {
        return Err(AppError::config_error(format!(
            "Could not extract an event SKU from '{link}'"
        )));
    }
    Ok(sku.to_string())
}
