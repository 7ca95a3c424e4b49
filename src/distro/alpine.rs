//! Alpine Linux minirootfs builder.
//!
//! Alpine publishes a minimal pre-built root filesystem per release and
//! architecture, so building the rootfs is one fetch and one extraction.
//! The tarball is unpacked straight from memory into the workspace;
//! no archive file ever lands on disk.

use anyhow::{Context, Result};
use std::path::Path;

use crate::distro::RootfsBuilder;
use crate::fetch::{extract_tar_gz, Fetch};

/// Builds an Alpine rootfs from the minirootfs snapshot tarball.
pub struct AlpineBuilder {
    tarball_url: String,
}

impl AlpineBuilder {
    /// Create a builder fetching from the given tarball URL.
    pub fn new(tarball_url: impl Into<String>) -> Self {
        Self {
            tarball_url: tarball_url.into(),
        }
    }
}

impl RootfsBuilder for AlpineBuilder {
    fn name(&self) -> &str {
        "alpine"
    }

    fn build(&self, workspace: &Path, fetcher: &dyn Fetch) -> Result<()> {
        println!("[alpine] fetching {}", self.tarball_url);
        let tarball = fetcher
            .fetch(&self.tarball_url)
            .with_context(|| format!("fetching Alpine minirootfs '{}'", self.tarball_url))?;

        println!(
            "[alpine] extracting minirootfs into '{}'",
            workspace.display()
        );
        extract_tar_gz(&tarball, workspace)?;
        Ok(())
    }
}
