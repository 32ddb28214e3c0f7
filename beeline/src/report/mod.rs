mod csv_writer;
mod link_match_row;
mod outcome_rows;
pub mod reference_tables;

pub use csv_writer::{create_writer, write_rows, REPORT_DELIMITER};
pub use link_match_row::LinkMatchRow;
pub use outcome_rows::{MatchFailureRow, ReassignmentRow};
