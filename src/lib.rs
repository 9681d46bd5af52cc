pub mod cli;
pub mod consts;
pub mod dataset;
mod download;
mod eval;
mod place;
mod progress;
mod report;
mod workspace;

pub use download::{download_to, unpack_tar_gz, ExtractError, FetchError};
pub use eval::{best_token_f1, token_f1};
pub use place::{place_candidates, Candidate, PlaceOutcome};
pub use report::{collect_reports, print_report_table, FileReport, LineCount};
pub use workspace::Workspace;
