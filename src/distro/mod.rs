//! Distribution builders.
//!
//! Each supported distribution implements the [`RootfsBuilder`] capability:
//! given a prepared, empty workspace, populate it with that distribution's
//! base file layout. Nothing flows back to the caller beyond success or
//! failure; the workspace contents are the builder's alone.

pub mod alpine;
pub mod arch;

pub use alpine::AlpineBuilder;
pub use arch::ArchBuilder;

use crate::fetch::Fetch;
use anyhow::Result;
use std::path::Path;

/// Capability for populating a prepared workspace with a root filesystem.
pub trait RootfsBuilder {
    /// Short name used in progress output ("alpine", "arch").
    fn name(&self) -> &str;

    /// Host tools the builder shells out to, as (command, package) pairs.
    ///
    /// Checked by the caller before the workspace is prepared, so a
    /// missing tool never leaves a half-made build behind.
    fn required_tools(&self) -> &[(&str, &str)] {
        &[]
    }

    /// Populate `workspace` with the distribution's base file layout.
    ///
    /// `workspace` is an existing, empty directory. Remote artifacts are
    /// fetched through `fetcher`.
    fn build(&self, workspace: &Path, fetcher: &dyn Fetch) -> Result<()>;
}
