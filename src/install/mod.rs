//! Runtime installation.
//!
//! Used only after every candidate runtime failed to start:
//!
//! - [`consent`] - Asking the operator before touching the network
//! - [`download`] - Fetching the installer package
//! - [`installer`] - Running the platform package installer

pub mod consent;
pub mod download;
pub mod installer;

pub use consent::{classify, prompt_install, InstallDecision};
pub use download::Downloader;
pub use installer::{installer_command, PackageInstaller, RuntimeInstaller};
