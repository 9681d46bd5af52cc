//! The transient directory archives are downloaded into and unpacked in.

use std::path::{Path, PathBuf};

use fs_err as fs;

/// A directory that exists for the duration of one fetch run. Everything
/// left inside when [`Workspace::remove`] is called goes with it: the
/// downloaded archives and any extracted files the placement pass did not
/// claim.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create the workspace directory, including missing parents. Creating
    /// an already-existing workspace is fine; a previous interrupted run may
    /// have left one behind.
    pub fn create(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path a downloaded archive is stored under.
    pub fn archive_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Recursively remove the workspace and everything still inside it.
    pub fn remove(self) -> std::io::Result<()> {
        fs::remove_dir_all(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_deletes_everything_inside() {
        let tempdir = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(tempdir.path().join("qasper_temp")).unwrap();
        fs::write(workspace.archive_path("left-over.tgz"), b"x").unwrap();

        let root = workspace.path().to_path_buf();
        workspace.remove().unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn create_tolerates_an_existing_directory() {
        let tempdir = tempfile::tempdir().unwrap();
        let root = tempdir.path().join("qasper_temp");
        Workspace::create(&root).unwrap();
        let workspace = Workspace::create(&root).unwrap();
        assert!(workspace.path().is_dir());
    }
}
