use std::io::{stdout, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic};

use crate::consts;
use crate::dataset::Split;

/// Print statistics for a downloaded split file.
#[derive(Debug, Parser)]
pub struct Args {
    /// Path to the split file, e.g. `data/qasper/validation.json`
    pub split: PathBuf,
}

pub async fn execute(args: Args) -> miette::Result<()> {
    let split = Split::load(&args.split)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to load `{}`", args.split.display()))?;
    let stats = split.statistics();

    eprintln!(
        "{}Loaded {} papers from {}",
        console::style(console::Emoji("✔ ", "")).green(),
        stats.papers,
        consts::SPLIT_STYLE.apply_to(args.split.display())
    );

    let mut writer = tabwriter::TabWriter::new(stdout());
    writeln!(
        writer,
        "{}\t{}",
        consts::HEADER_STYLE.apply_to("Papers"),
        stats.papers
    )
    .into_diagnostic()?;
    writeln!(
        writer,
        "{}\t{}",
        consts::HEADER_STYLE.apply_to("Questions"),
        stats.questions
    )
    .into_diagnostic()?;
    writeln!(
        writer,
        "{}\t{}",
        consts::HEADER_STYLE.apply_to("Answerable questions"),
        stats.answerable_questions
    )
    .into_diagnostic()?;
    writeln!(
        writer,
        "{}\t{:.2}",
        consts::HEADER_STYLE.apply_to("Questions per paper"),
        stats.average_questions()
    )
    .into_diagnostic()?;
    match stats.answerable_rate() {
        Some(rate) => writeln!(
            writer,
            "{}\t{:.1}%",
            consts::HEADER_STYLE.apply_to("Answerable rate"),
            rate * 100.0
        ),
        None => writeln!(
            writer,
            "{}\t-",
            consts::HEADER_STYLE.apply_to("Answerable rate")
        ),
    }
    .into_diagnostic()?;
    writer.flush().into_diagnostic()?;

    Ok(())
}
