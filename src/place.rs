//! Relocation of extracted split files into the destination directory.

use std::path::{Path, PathBuf};

use fs_err as fs;

/// One file the extracted archives are expected to contain, together with
/// the name it is published under in the destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// File name the archive is expected to contain.
    pub source: &'static str,
    /// File name inside the destination directory.
    pub dest: &'static str,
}

/// Per-candidate result of a placement pass.
///
/// Absence of a candidate is a normal outcome, not an error: the names
/// inside the upstream archives are outside this tool's control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The candidate existed and was renamed into the destination directory.
    Placed(PathBuf),
    /// The candidate was not present in the workspace.
    Missing,
}

/// Move every candidate that exists in `workspace` to its destination name
/// under `dest_dir`, creating `dest_dir` first. Returns one outcome per
/// candidate, in input order.
pub fn place_candidates(
    workspace: &Path,
    dest_dir: &Path,
    candidates: &[Candidate],
) -> std::io::Result<Vec<(Candidate, PlaceOutcome)>> {
    fs::create_dir_all(dest_dir)?;

    let mut outcomes = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let source = workspace.join(candidate.source);
        if source.is_file() {
            let dest = dest_dir.join(candidate.dest);
            fs::rename(&source, &dest)?;
            outcomes.push((*candidate, PlaceOutcome::Placed(dest)));
        } else {
            tracing::debug!(
                "`{}` not present in the extracted archives, skipping",
                candidate.source
            );
            outcomes.push((*candidate, PlaceOutcome::Missing));
        }
    }
    Ok(outcomes)
}
