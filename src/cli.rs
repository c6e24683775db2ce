use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only manages configuration and no
/// report should be generated.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// VexInfo - VEX Robotics Team Statistics Report Generator
///
/// Builds a per-team statistics report for a VEX robotics event. Point it
/// at a RobotEvents event page and it resolves the event's season and team
/// list, pulls each team's statistics from the VexDB API, and writes one
/// spreadsheet-ready CSV row per team.
///
/// Metrics whose source data does not exist for a team (no ranked matches,
/// no skills runs, no vrating yet) are written as NOT_FOUND rather than a
/// misleading zero.
#[derive(Parser, Debug)]
#[command(author = "Robert Engle", about, long_about = None)]
#[command(version)]
#[command(styles = get_styles())]
pub struct Args {
    /// RobotEvents event page link, e.g.
    /// https://www.robotevents.com/robot-competitions/vex-robotics-competition/RE-VRC-17-3805.html
    /// The event's SKU, season, and team list are resolved from it.
    #[arg(short = 'e', long = "event", value_name = "LINK")]
    pub event_link: Option<String>,

    /// Build the report for explicit team numbers instead of an event.
    /// Repeat the flag or separate numbers with commas. Requires --season.
    #[arg(
        short = 't',
        long = "team",
        value_name = "NUMBER",
        value_delimiter = ','
    )]
    pub teams: Vec<String>,

    /// Season name to pull statistics for, e.g. "In The Zone".
    /// Required with --team; with --event it overrides the event's season.
    #[arg(short = 's', long = "season", value_name = "SEASON")]
    pub season: Option<String>,

    /// Path of the CSV report to write. Defaults to vexinfo-report.csv in
    /// the current directory.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Suppress progress output on stdout; log only to the log file.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Update API domain in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
