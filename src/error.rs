//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the error type used throughout
//! the launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A runtime that cannot be started is not an error; it is
//!   [`ExecutionOutcome::NotFound`](crate::runtime::ExecutionOutcome::NotFound)
//!   and drives the install flow
//! - `LauncherError` covers the failures that end a run early: the launcher
//!   directory cannot be resolved, or the install step itself broke
//! - All errors should provide actionable messages for operators

use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The directory containing the launcher binary could not be determined.
    #[error("Cannot determine launcher directory: {message}")]
    LauncherDirectoryUnresolvable { message: String },

    /// Fetching the installer package failed.
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// The platform package installer could not be started.
    #[error("Failed to start installer '{program}': {message}")]
    InstallerLaunch { program: String, message: String },

    /// No installer package is known for this platform.
    #[error("No installer package is available for {platform}")]
    InstallerUnavailable { platform: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
