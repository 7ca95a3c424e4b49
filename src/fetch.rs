//! Remote tarball fetching and extraction.
//!
//! Builders never talk to the network directly; they go through the
//! [`Fetch`] capability so tests can substitute an in-memory fake.
//! Extraction streams the gzip-compressed tar straight into the target
//! directory, so no archive file is left behind to clean up.

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use std::path::Path;
use tar::Archive;

/// Capability for fetching remote artifacts.
pub trait Fetch {
    /// Fetch the artifact at `url` into memory.
    ///
    /// A response that is not an outright success (HTTP 2xx or the
    /// fake equivalent) is an error; partial downloads must not be
    /// handed to the extractor.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Fetch`] implementation backed by a blocking HTTP client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("requesting '{url}'"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("download of '{url}' failed with HTTP status {status}");
        }

        let body = response
            .bytes()
            .with_context(|| format!("reading response body from '{url}'"))?;
        Ok(body.to_vec())
    }
}

/// Unpack a gzip-compressed tar archive into `dest`.
///
/// `dest` must already exist; entries are created beneath it with the
/// permissions recorded in the archive.
pub fn extract_tar_gz(bytes: &[u8], dest: &Path) -> Result<()> {
    let decoder = GzDecoder::new(bytes);
    let mut archive = Archive::new(decoder);
    archive.set_preserve_permissions(true);
    archive
        .unpack(dest)
        .with_context(|| format!("extracting rootfs tarball into '{}'", dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_rejects_garbage() {
        let temp = TempDir::new().unwrap();

        let err = extract_tar_gz(b"not a gzip stream", temp.path()).unwrap_err();
        assert!(err.to_string().contains("extracting"));
    }
}
