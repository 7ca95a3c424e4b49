//! Build configuration.
//!
//! The workspace location is derived from an explicitly passed project
//! root rather than the tool's own install location, so the core logic
//! stays path-agnostic and testable against temporary directories.
//!
//! An optional `mkrootfs.toml` at the root overrides per-distribution
//! settings; everything has a default, so the file may be absent.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Version-pinned Alpine minirootfs snapshot for x86_64.
pub const DEFAULT_ALPINE_TARBALL_URL: &str =
    "https://dl-cdn.alpinelinux.org/alpine/v3.22/releases/x86_64/alpine-minirootfs-3.22.0-x86_64.tar.gz";

const CONFIG_FILE: &str = "mkrootfs.toml";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root; the workspace lives at `<root>/target/rootfs`.
    pub root_dir: PathBuf,
    /// URL of the Alpine minirootfs tarball to fetch.
    pub alpine_tarball_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    alpine: Option<AlpineToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlpineToml {
    tarball_url: Option<String>,
}

impl BuildConfig {
    /// Load configuration for the given project root.
    ///
    /// Reads `mkrootfs.toml` from the root if present; otherwise every
    /// field takes its default.
    pub fn load(root_dir: &Path) -> Result<Self> {
        let config_path = root_dir.join(CONFIG_FILE);
        let mut alpine_tarball_url = DEFAULT_ALPINE_TARBALL_URL.to_string();

        if config_path.is_file() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("reading config '{}'", config_path.display()))?;
            let parsed: ConfigToml = toml::from_str(&raw)
                .with_context(|| format!("parsing config '{}'", config_path.display()))?;

            if let Some(url) = parsed.alpine.and_then(|alpine| alpine.tarball_url) {
                alpine_tarball_url = url;
            }
        }

        Ok(Self {
            root_dir: root_dir.to_path_buf(),
            alpine_tarball_url,
        })
    }

    /// Workspace directory the builders populate.
    pub fn workspace_dir(&self) -> PathBuf {
        self.root_dir.join("target").join("rootfs")
    }
}
