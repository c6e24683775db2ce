pub mod rows;
pub mod writer;

pub use rows::{COLUMN_HEADERS, build_header_row, build_team_row, team_link};
pub use writer::{CsvSink, RowSink};
