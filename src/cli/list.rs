use std::path::PathBuf;

use clap::Parser;

use crate::consts;
use crate::report::{collect_reports, print_report_table};

/// List the placed split files with their size and line count.
#[derive(Debug, Parser)]
#[clap(arg_required_else_help = false)]
pub struct Args {
    /// The directory containing the placed split files
    #[arg(long, default_value = consts::DEST_DIR)]
    pub dir: PathBuf,
}

pub async fn execute(args: Args) -> miette::Result<()> {
    let reports = match collect_reports(&args.dir, consts::SPLIT_EXTENSION) {
        Ok(reports) => reports,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            return Err(miette::miette!(
                "failed to list `{}`: {err}",
                args.dir.display()
            ))
        }
    };

    if reports.is_empty() {
        eprintln!(
            "{}No split files found in {}. Run `qasper fetch` first.",
            console::style(console::Emoji("✘ ", "")).red(),
            consts::SPLIT_STYLE.apply_to(args.dir.display())
        );
        return Ok(());
    }

    print_report_table(&reports).expect("an io error occurred");

    Ok(())
}
