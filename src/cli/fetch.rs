use std::path::Path;

use clap::Parser;
use indicatif::ProgressBar;
use itertools::Itertools;
use miette::{Context, IntoDiagnostic};
use reqwest::Client;

use crate::consts;
use crate::download::{download_to, unpack_tar_gz};
use crate::place::{place_candidates, PlaceOutcome};
use crate::progress::{await_in_progress, default_bytes_style, global_multi_progress};
use crate::report::{collect_reports, print_report_table};
use crate::workspace::Workspace;

/// Download the dataset archives and place the split files under `data/qasper`.
#[derive(Debug, Parser)]
pub struct Args {}

pub async fn execute(_args: Args) -> miette::Result<()> {
    // The pipeline is strictly sequential: workspace, two downloads, two
    // unpacks, placement, cleanup, report. A failure before placement
    // leaves the workspace on disk for inspection.
    let workspace = Workspace::create(consts::WORKSPACE_DIR)
        .into_diagnostic()
        .wrap_err("failed to create the download workspace")?;

    let client = Client::new();
    for archive_name in [consts::TRAIN_DEV_ARCHIVE, consts::TEST_ARCHIVE] {
        let url = format!("{}/{}", consts::DATASET_BASE_URL, archive_name);
        let archive_path = workspace.archive_path(archive_name);

        eprintln!(
            "{}Downloading {}",
            console::style(console::Emoji("⏳ ", "")).yellow(),
            consts::SPLIT_STYLE.apply_to(archive_name)
        );
        let progress_bar = global_multi_progress()
            .add(ProgressBar::new(0).with_style(default_bytes_style()));
        progress_bar.set_prefix("downloading");
        let downloaded = download_to(&client, &url, &archive_path, &progress_bar).await;
        progress_bar.finish_and_clear();
        downloaded
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to download `{url}`"))?;

        await_in_progress(format!("unpacking {archive_name}"), |_| async {
            unpack_tar_gz(&archive_path, workspace.path())
        })
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to unpack `{archive_name}`"))?;

        eprintln!(
            "{}Unpacked {}",
            console::style(console::Emoji("✔ ", "")).green(),
            consts::SPLIT_STYLE.apply_to(archive_name)
        );
    }

    let placements = place_candidates(
        workspace.path(),
        Path::new(consts::DEST_DIR),
        &consts::CANDIDATES,
    )
    .into_diagnostic()
    .wrap_err("failed to place the split files")?;

    for (_, outcome) in &placements {
        if let PlaceOutcome::Placed(dest) = outcome {
            eprintln!(
                "{}Placed {}",
                console::style(console::Emoji("✔ ", "")).green(),
                consts::SPLIT_STYLE.apply_to(dest.display())
            );
        }
    }
    let missing = placements
        .iter()
        .filter(|(_, outcome)| matches!(outcome, PlaceOutcome::Missing))
        .map(|(candidate, _)| candidate.source)
        .join(", ");
    if !missing.is_empty() {
        tracing::debug!("not found in the archives: {missing}");
    }

    workspace
        .remove()
        .into_diagnostic()
        .wrap_err("failed to remove the download workspace")?;
    eprintln!(
        "{}Removed {}",
        console::style(console::Emoji("✔ ", "")).green(),
        consts::SPLIT_STYLE.apply_to(consts::WORKSPACE_DIR)
    );

    let reports = collect_reports(Path::new(consts::DEST_DIR), consts::SPLIT_EXTENSION)
        .into_diagnostic()
        .wrap_err("failed to list the destination directory")?;

    if reports.is_empty() {
        eprintln!(
            "{}No split files were placed.",
            console::style(console::Emoji("✘ ", "")).red(),
        );
    } else {
        print_report_table(&reports).expect("an io error occurred");
    }

    Ok(())
}
