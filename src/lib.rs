//! VEX Robotics Team Statistics Library
//!
//! This library pulls per-team competition statistics from the VexDB API,
//! reduces them into summary metrics, and builds spreadsheet-ready report
//! rows. Metrics whose source collections are empty for a team are tracked
//! per call and rendered as a sentinel instead of a misleading zero.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vexinfo::data_fetcher::api::{create_http_client_with_timeout, fetch_team_data};
//! use vexinfo::error::AppError;
//! use vexinfo::sheet::build_team_row;
//! use vexinfo::summary::aggregate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = create_http_client_with_timeout(30)?;
//!
//!     // Fetch the six statistic collections for one team
//!     let raw = fetch_team_data(&client, "https://api.vexdb.io", "90241B", "In The Zone").await?;
//!
//!     // Reduce them to summary metrics plus per-metric availability
//!     let (summary, available) = aggregate("90241B", &raw)?;
//!
//!     // Build the report row, with NOT_FOUND for unavailable metrics
//!     let row = build_team_row(&summary, &available);
//!     println!("{}", row.join(","));
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod sheet;
pub mod summary;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::fetch_team_data;
pub use data_fetcher::models::{RawTeamData, TeamInfo};
pub use error::AppError;
pub use sheet::{build_header_row, build_team_row};
pub use summary::{FieldAvailability, TeamSummary, aggregate};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
