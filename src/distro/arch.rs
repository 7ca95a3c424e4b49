//! Arch Linux bootstrap builder.
//!
//! Arch ships no pre-built rootfs tarball the way Alpine does; the
//! supported path is bootstrapping with `pacstrap` from the
//! arch-install-scripts package, which installs the `base` package set
//! directly into the workspace using the host's pacman.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::distro::RootfsBuilder;
use crate::fetch::Fetch;

const REQUIRED_TOOLS: &[(&str, &str)] = &[("pacstrap", "arch-install-scripts")];

/// Builds an Arch rootfs by running the host's `pacstrap`.
pub struct ArchBuilder;

impl RootfsBuilder for ArchBuilder {
    fn name(&self) -> &str {
        "arch"
    }

    fn required_tools(&self) -> &[(&str, &str)] {
        REQUIRED_TOOLS
    }

    fn build(&self, workspace: &Path, _fetcher: &dyn Fetch) -> Result<()> {
        println!(
            "[arch] bootstrapping base system into '{}'",
            workspace.display()
        );

        // -c uses the host's package cache instead of one inside the target.
        let status = Command::new("pacstrap")
            .arg("-c")
            .arg(workspace)
            .arg("base")
            .status()
            .context("running pacstrap")?;

        if !status.success() {
            bail!("pacstrap exited with {}", status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declares_pacstrap_as_required() {
        let builder = ArchBuilder;
        assert_eq!(
            builder.required_tools(),
            &[("pacstrap", "arch-install-scripts")]
        );
    }
}
