//! Root filesystem build tooling for container and VM base images.
//!
//! This crate populates a single workspace directory (`<root>/target/rootfs`)
//! with the base file layout of an operating system distribution, suitable
//! for use as a container or virtual machine base image.
//!
//! - **Workspace management** - Idempotent prepare/destroy of the one build
//!   directory. A build refuses to start on top of a previous one.
//! - **Distribution builders** - Variant-specific logic behind the
//!   [`RootfsBuilder`] capability. Alpine unpacks a pinned minirootfs
//!   snapshot; Arch bootstraps with the host's `pacstrap`.
//! - **Fetching** - Remote artifacts come through the injectable [`Fetch`]
//!   capability so builds can be tested without network access.
//! - **Preflight checks** - Host tool validation before builds that shell
//!   out, so a missing tool fails with an actionable message.
//!
//! # Example
//!
//! ```rust,ignore
//! use mkrootfs::{AlpineBuilder, BuildConfig, HttpFetcher, RootfsBuilder, Workspace};
//!
//! let config = BuildConfig::load(Path::new("."))?;
//! let workspace = Workspace::new(config.workspace_dir());
//! workspace.prepare()?;
//!
//! let builder = AlpineBuilder::new(&config.alpine_tarball_url);
//! builder.build(workspace.dir(), &HttpFetcher::new())?;
//! ```

pub mod config;
pub mod distro;
pub mod fetch;
pub mod preflight;
pub mod workspace;

pub use config::BuildConfig;
pub use distro::{AlpineBuilder, ArchBuilder, RootfsBuilder};
pub use fetch::{Fetch, HttpFetcher};
pub use workspace::{CleanOutcome, Workspace};
