//! Installer package download.
//!
//! A plain blocking GET with no timeout. The package is not checksummed or
//! signature-checked; the post-install retry is the only verification.

use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::{LauncherError, Result};
use crate::ui::ProgressHandle;

const CHUNK_SIZE: usize = 64 * 1024;

/// Fetches installer packages over HTTP/HTTPS.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    /// Create a downloader with no request timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("waf-launcher/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| LauncherError::Other(e.into()))?;
        Ok(Self { client })
    }

    /// Download `url` to `dest`, reporting bytes to `progress`.
    ///
    /// Returns the number of bytes written. A partial file is removed on
    /// failure.
    pub fn download_to(
        &self,
        url: &str,
        dest: &Path,
        progress: &mut dyn ProgressHandle,
    ) -> Result<u64> {
        let result = self.fetch_into(url, dest, progress);
        if result.is_err() && dest.exists() {
            fs::remove_file(dest).ok();
        }
        result
    }

    fn fetch_into(&self, url: &str, dest: &Path, progress: &mut dyn ProgressHandle) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_error(url, e))?;

        if !response.status().is_success() {
            return Err(LauncherError::Download {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        if let Some(len) = response.content_length() {
            progress.set_length(len);
        }

        let mut file = File::create(dest)?;
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written = 0u64;
        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| download_error(url, e))?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            written += n as u64;
            progress.advance(n as u64);
        }
        file.flush()?;

        debug!(url, bytes = written, dest = %dest.display(), "installer downloaded");
        Ok(written)
    }
}

fn download_error(url: &str, e: impl std::fmt::Display) -> LauncherError {
    LauncherError::Download {
        url: url.to_string(),
        message: e.to_string(),
    }
}
