//! Workspace preparation and reclamation.
//!
//! The workspace is the single directory a distribution builder populates.
//! At most one may exist under a given root at a time: [`Workspace::prepare`]
//! refuses to create a second one so a fresh build never lands on top of a
//! previous one. The contents are opaque to this module; they are owned
//! entirely by whichever builder filled them in.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a [`Workspace::destroy`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The workspace existed and was removed.
    Removed,
    /// There was nothing to remove.
    NothingToClean,
}

/// The single build workspace directory.
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    /// Wrap the workspace directory path. Nothing is touched on disk.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the workspace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the workspace directory, empty.
    ///
    /// Fails without mutating anything if the directory already exists;
    /// the previous build must be reclaimed with `clean` first. The parent
    /// directory is created if missing so the tool works in a fresh
    /// checkout, but the workspace itself is created single-level.
    pub fn prepare(&self) -> Result<()> {
        if self.dir.exists() {
            bail!(
                "a rootfs build already exists at '{}'; run 'mkrootfs clean' first",
                self.dir.display()
            );
        }

        if let Some(parent) = self.dir.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating '{}'", parent.display()))?;
        }
        fs::create_dir(&self.dir)
            .with_context(|| format!("creating workspace '{}'", self.dir.display()))?;
        Ok(())
    }

    /// Recursively delete the workspace and everything beneath it.
    ///
    /// A missing workspace is not an error; the caller gets
    /// [`CleanOutcome::NothingToClean`] and decides how loudly to say so.
    /// A deletion that actually fails (permissions, in-use files) is
    /// surfaced rather than swallowed.
    pub fn destroy(&self) -> Result<CleanOutcome> {
        if !self.dir.exists() {
            return Ok(CleanOutcome::NothingToClean);
        }

        fs::remove_dir_all(&self.dir)
            .with_context(|| format!("removing workspace '{}'", self.dir.display()))?;
        Ok(CleanOutcome::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace_in(temp: &TempDir) -> Workspace {
        Workspace::new(temp.path().join("target").join("rootfs"))
    }

    #[test]
    fn test_prepare_creates_empty_directory() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace_in(&temp);

        workspace.prepare().unwrap();

        assert!(workspace.dir().is_dir());
        assert_eq!(fs::read_dir(workspace.dir()).unwrap().count(), 0);
    }

    #[test]
    fn test_prepare_refuses_existing_workspace() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace_in(&temp);

        workspace.prepare().unwrap();
        fs::write(workspace.dir().join("etc"), "leftover").unwrap();

        let err = workspace.prepare().unwrap_err();
        assert!(err.to_string().contains("clean"), "message should suggest clean: {err}");

        // The previous build is untouched.
        assert_eq!(
            fs::read_to_string(workspace.dir().join("etc")).unwrap(),
            "leftover"
        );
    }

    #[test]
    fn test_destroy_removes_populated_workspace() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace_in(&temp);

        workspace.prepare().unwrap();
        fs::create_dir_all(workspace.dir().join("usr/bin")).unwrap();
        fs::write(workspace.dir().join("usr/bin/sh"), "#!/bin/sh").unwrap();

        assert_eq!(workspace.destroy().unwrap(), CleanOutcome::Removed);
        assert!(!workspace.dir().exists());
    }

    #[test]
    fn test_destroy_missing_workspace_is_advisory() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace_in(&temp);

        assert_eq!(workspace.destroy().unwrap(), CleanOutcome::NothingToClean);
    }

    #[test]
    fn test_destroy_twice_is_safe() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace_in(&temp);

        workspace.prepare().unwrap();
        assert_eq!(workspace.destroy().unwrap(), CleanOutcome::Removed);
        assert_eq!(workspace.destroy().unwrap(), CleanOutcome::NothingToClean);
    }

    #[test]
    fn test_prepare_after_destroy_succeeds() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace_in(&temp);

        workspace.prepare().unwrap();
        workspace.destroy().unwrap();
        workspace.prepare().unwrap();

        assert!(workspace.dir().is_dir());
    }
}
