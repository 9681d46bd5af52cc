//! Size and line-count diagnostics for the destination directory.

use std::ffi::OsStr;
use std::io::{stdout, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use fs_err as fs;
use human_bytes::human_bytes;

use crate::consts;

/// Line count of a placed file, or the reason it could not be counted.
///
/// Counting is purely informational; a failure here must never abort the
/// report for the remaining files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCount {
    Lines(u64),
    Unavailable(String),
}

impl std::fmt::Display for LineCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineCount::Lines(n) => write!(f, "{n}"),
            LineCount::Unavailable(_) => write!(f, "-"),
        }
    }
}

/// Diagnostics for one file in the destination directory.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub lines: LineCount,
}

/// Collect a report entry for every file with `extension` directly inside
/// `dir`, sorted by path. Subdirectories are not traversed. Reading the
/// directory has no side effects; running this twice yields the same view.
pub fn collect_reports(dir: &Path, extension: &str) -> std::io::Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file()
            || path.extension().and_then(OsStr::to_str) != Some(extension)
        {
            continue;
        }
        let size_bytes = entry.metadata()?.len();
        let lines = match count_lines(&path) {
            Ok(n) => LineCount::Lines(n),
            Err(err) => LineCount::Unavailable(err.to_string()),
        };
        reports.push(FileReport {
            path,
            size_bytes,
            lines,
        });
    }
    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(reports)
}

/// Count newline bytes, the way `wc -l` does.
fn count_lines(path: &Path) -> std::io::Result<u64> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::with_capacity(1024 * 1024, file);
    let mut lines = 0u64;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        let len = buf.len();
        reader.consume(len);
    }
    Ok(lines)
}

/// Print the collected reports as a table on stdout.
pub fn print_report_table(reports: &[FileReport]) -> std::io::Result<()> {
    let mut writer = tabwriter::TabWriter::new(stdout());

    writeln!(
        writer,
        "{}\t{}\t{}",
        consts::HEADER_STYLE.apply_to("File"),
        consts::HEADER_STYLE.apply_to("Size"),
        consts::HEADER_STYLE.apply_to("Lines")
    )?;

    for report in reports {
        let name = report
            .path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        writeln!(
            writer,
            "{}\t{}\t{}",
            name,
            human_bytes(report.size_bytes as f64),
            report.lines
        )?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_matching_files_directly_inside() {
        let tempdir = tempfile::tempdir().unwrap();
        fs::write(tempdir.path().join("train.json"), "line one\nline two\n").unwrap();
        fs::write(tempdir.path().join("notes.txt"), "not reported\n").unwrap();
        fs::create_dir(tempdir.path().join("sub")).unwrap();
        fs::write(tempdir.path().join("sub").join("inner.json"), "{}\n").unwrap();
        fs::create_dir(tempdir.path().join("dir.json")).unwrap();

        let reports = collect_reports(tempdir.path(), "json").unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].path.file_name().unwrap(), "train.json");
        assert_eq!(reports[0].size_bytes, "line one\nline two\n".len() as u64);
        assert_eq!(reports[0].lines, LineCount::Lines(2));
    }

    #[test]
    fn report_order_is_stable() {
        let tempdir = tempfile::tempdir().unwrap();
        for name in ["validation.json", "test.json", "train.json"] {
            fs::write(tempdir.path().join(name), "{}\n").unwrap();
        }

        let names: Vec<_> = collect_reports(tempdir.path(), "json")
            .unwrap()
            .into_iter()
            .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["test.json", "train.json", "validation.json"]);
    }

    #[test]
    fn final_line_without_newline_is_not_counted() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("partial.json");
        fs::write(&path, "first\nsecond").unwrap();

        assert_eq!(count_lines(&path).unwrap(), 1);
    }

    #[test]
    fn count_failure_is_reported_not_raised() {
        let missing = Path::new("does/not/exist.json");
        assert!(count_lines(missing).is_err());

        let unavailable = LineCount::Unavailable("boom".to_string());
        assert_eq!(unavailable.to_string(), "-");
    }
}
