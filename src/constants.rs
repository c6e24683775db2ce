//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and fixed strings so the rest of
//! the codebase stays free of inline literals.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default VexDB API domain used when the config file does not override it
pub const DEFAULT_API_DOMAIN: &str = "https://api.vexdb.io";

/// Base URL for a team's public VexDB page, completed with the team number
pub const TEAM_LINK_BASE: &str = "https://vexdb.io/teams/view";

/// Suffix the awards endpoint appends to award names; stripped before grouping
pub const AWARD_NAME_SUFFIX: &str = "(VRC/VEXU)";

/// Placeholder written into report cells whose backing collection had no data
pub const NOT_FOUND_SENTINEL: &str = "NOT_FOUND";

/// Default path of the generated CSV report
pub const DEFAULT_OUTPUT_PATH: &str = "vexinfo-report.csv";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "VEXINFO_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "VEXINFO_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "VEXINFO_HTTP_TIMEOUT";
}

/// Retry configuration for API calls
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;

    /// Retry delay for rate limit errors (seconds)
    pub const RATE_LIMIT_DELAY_SECONDS: u64 = 60;

    /// Retry delay for server errors (seconds)
    pub const SERVER_ERROR_DELAY_SECONDS: u64 = 5;

    /// Retry delay for service unavailable errors (seconds)
    pub const SERVICE_UNAVAILABLE_DELAY_SECONDS: u64 = 30;

    /// Retry delay for network timeout errors (seconds)
    pub const NETWORK_TIMEOUT_DELAY_SECONDS: u64 = 2;

    /// Retry delay for network connection errors (seconds)
    pub const NETWORK_CONNECTION_DELAY_SECONDS: u64 = 10;
}

/// Skills run type codes as returned by the skills endpoint
pub mod skills_type {
    /// Autonomous-only skills run
    pub const AUTON: i32 = 0;

    /// Driver-controlled skills run
    pub const ROBOT: i32 = 1;

    /// Combined autonomous + driver run
    pub const COMBINED: i32 = 2;
}
