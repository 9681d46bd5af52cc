//! Downloading and unpacking the dataset archives.

use std::io::Write;
use std::path::Path;

use flate2::read::GzDecoder;
use fs_err::File;
use indicatif::ProgressBar;
use reqwest::Client;
use tar::Archive;
use thiserror::Error;
use url::Url;

/// Errors that can occur while fetching an archive.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{url} returned {status}")]
    HttpStatus {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("invalid download url `{0}`")]
    InvalidUrl(String),
}

/// Errors emitted while unpacking an archive.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to unpack tar archive: {0}")]
    Tar(String),
}

fn user_agent() -> String {
    format!("qasper {}", env!("CARGO_PKG_VERSION"))
}

/// Perform an HTTP GET for `url`, following redirects, and stream the
/// response body to `dest`. The progress bar tracks received bytes.
///
/// There is deliberately no retry or resumption: a failed transfer is
/// reported to the caller and the pipeline stops.
pub async fn download_to(
    client: &Client,
    url: &str,
    dest: &Path,
    progress_bar: &ProgressBar,
) -> Result<(), FetchError> {
    let url = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

    let mut response = client
        .get(url.clone())
        .header("User-Agent", user_agent())
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus {
            url,
            status: response.status(),
        });
    }

    if let Some(len) = response.content_length() {
        progress_bar.set_length(len);
    }
    tracing::debug!(
        "GET {} -> {} ({:?} bytes)",
        url,
        response.status(),
        response.content_length()
    );

    let mut file = File::create(dest)?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk)?;
        progress_bar.inc(chunk.len() as u64);
    }

    Ok(())
}

/// Unpack a gzip-compressed tar archive into `target_dir`, preserving the
/// entry paths stored in the archive. The file names inside are whatever the
/// upstream release put there; callers must not assume any particular entry
/// exists afterwards.
pub fn unpack_tar_gz(archive_path: &Path, target_dir: &Path) -> Result<(), ExtractError> {
    let file = File::open(archive_path)?;
    let buf_reader = std::io::BufReader::with_capacity(1024 * 1024, file);
    let mut archive = Archive::new(GzDecoder::new(buf_reader));
    archive
        .unpack(target_dir)
        .map_err(|e| ExtractError::Tar(e.to_string()))?;
    Ok(())
}
