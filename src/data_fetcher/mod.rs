pub mod api;
pub mod models;

pub use api::{fetch_event_info, fetch_event_teams, fetch_team_data};
pub use models::{EventInfo, RawTeamData};
