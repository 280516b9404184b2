//! Launcher configuration.
//!
//! Everything the launcher needs to know about its surroundings is computed
//! once at startup and passed down explicitly:
//!
//! - [`LauncherConfig`] - base and temp directories, candidate runtimes,
//!   installer package
//! - [`Settings`] - operator switches read from the environment
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use waf_launcher::config::LauncherConfig;
//!
//! let config = LauncherConfig::for_base_dir(Path::new("/opt/project"));
//! assert_eq!(config.tool_path(), Path::new("/opt/project").join("waf"));
//! assert_eq!(config.candidates()[0], "python");
//! ```

pub mod settings;

pub use settings::Settings;

use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};

/// Name of the build tool expected next to the launcher binary.
pub const TOOL_NAME: &str = "waf";

/// Interpreter name resolved through the OS search path.
pub const INTERPRETER: &str = "python";

/// Interpreter versions probed at well-known locations, in priority order.
pub const PREFERRED_VERSIONS: &[(u8, u8)] = &[(2, 7), (3, 2), (2, 6), (3, 1), (2, 5), (3, 0)];

/// Windows installer package fetched when no runtime can be found.
pub const INSTALLER_URL: &str = "http://www.python.org/ftp/python/2.7.1/python-2.7.1.msi";

/// File name the Windows package is saved under.
pub const INSTALLER_FILE_NAME: &str = "python-2.7.1.msi";

/// macOS installer package.
pub const PKG_INSTALLER_URL: &str =
    "https://www.python.org/ftp/python/2.7.18/python-2.7.18-macosx10.9.pkg";

/// File name the macOS package is saved under.
pub const PKG_INSTALLER_FILE_NAME: &str = "python-2.7.18-macosx10.9.pkg";

/// Where operators can get Python by hand on platforms without a package.
pub const DOWNLOAD_PAGE_URL: &str = "http://www.python.org/download/";

/// How to invoke the platform package installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerSpec {
    /// URL of the installer package.
    pub url: String,
    /// File name under the temp directory.
    pub file_name: String,
    /// Installer executable (e.g. `msiexec`).
    pub program: String,
    /// Flags placed before the package path.
    pub args: Vec<String>,
    /// Flags placed after the package path.
    pub trailing_args: Vec<String>,
}

impl InstallerSpec {
    /// The Windows MSI package, installed quietly via `msiexec`.
    pub fn msi() -> Self {
        Self {
            url: INSTALLER_URL.to_string(),
            file_name: INSTALLER_FILE_NAME.to_string(),
            program: "msiexec".to_string(),
            args: vec!["/qn".to_string(), "/i".to_string()],
            trailing_args: Vec::new(),
        }
    }

    /// The macOS flat package, installed onto the boot volume.
    pub fn pkg() -> Self {
        Self {
            url: PKG_INSTALLER_URL.to_string(),
            file_name: PKG_INSTALLER_FILE_NAME.to_string(),
            program: "installer".to_string(),
            args: vec!["-pkg".to_string()],
            trailing_args: vec!["-target".to_string(), "/".to_string()],
        }
    }

    /// Installer package for the platform this binary was built for.
    pub fn for_platform() -> Option<Self> {
        if cfg!(windows) {
            Some(Self::msi())
        } else if cfg!(target_os = "macos") {
            Some(Self::pkg())
        } else {
            None
        }
    }
}

/// Startup configuration threaded through a launcher run.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Directory containing the launcher binary (and the target tool).
    pub base_dir: PathBuf,
    /// Directory the installer package is downloaded to.
    pub temp_dir: PathBuf,
    /// File name of the target tool inside `base_dir`.
    pub tool_name: String,
    /// Bare interpreter name, tried first.
    pub interpreter: String,
    /// Absolute interpreter locations, tried after `interpreter` in order.
    pub well_known: Vec<String>,
    /// URL shown to operators who decline the automatic install.
    pub manual_download_url: String,
    /// How the search-path variable is spelled on this platform.
    pub path_hint: String,
    /// Installer package for this platform. Without one the launcher never
    /// offers an automatic install.
    pub installer: Option<InstallerSpec>,
}

impl LauncherConfig {
    /// Resolve the launcher's own directory and build the platform defaults.
    pub fn discover() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| {
            LauncherError::LauncherDirectoryUnresolvable {
                message: e.to_string(),
            }
        })?;
        let base_dir = base_dir_of(&exe)?;
        Ok(Self::for_base_dir(&base_dir))
    }

    /// Platform defaults for a launcher living in `base_dir`.
    pub fn for_base_dir(base_dir: &Path) -> Self {
        let installer = InstallerSpec::for_platform();
        let manual_download_url = installer
            .as_ref()
            .map_or(DOWNLOAD_PAGE_URL, |spec| spec.url.as_str())
            .to_string();

        Self {
            base_dir: base_dir.to_path_buf(),
            temp_dir: std::env::temp_dir(),
            tool_name: TOOL_NAME.to_string(),
            interpreter: INTERPRETER.to_string(),
            well_known: well_known_locations(),
            manual_download_url,
            path_hint: path_hint().to_string(),
            installer,
        }
    }

    /// Full path of the target tool.
    pub fn tool_path(&self) -> PathBuf {
        self.base_dir.join(&self.tool_name)
    }

    /// Whether an automatic install can be offered.
    pub fn can_install(&self) -> bool {
        self.installer.is_some()
    }

    /// Candidate runtimes in the order they are tried.
    pub fn candidates(&self) -> Vec<String> {
        let mut candidates = Vec::with_capacity(self.well_known.len() + 1);
        candidates.push(self.interpreter.clone());
        candidates.extend(self.well_known.iter().cloned());
        candidates
    }
}

/// Directory containing `exe`.
pub fn base_dir_of(exe: &Path) -> Result<PathBuf> {
    match exe.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => Err(LauncherError::LauncherDirectoryUnresolvable {
            message: format!("{} has no parent directory", exe.display()),
        }),
    }
}

/// Well-known interpreter install locations for this platform.
pub fn well_known_locations() -> Vec<String> {
    PREFERRED_VERSIONS
        .iter()
        .map(|&(major, minor)| install_location(major, minor))
        .collect()
}

#[cfg(windows)]
fn install_location(major: u8, minor: u8) -> String {
    format!("C:\\Python{}{}\\python.exe", major, minor)
}

#[cfg(target_os = "macos")]
fn install_location(major: u8, minor: u8) -> String {
    format!(
        "/Library/Frameworks/Python.framework/Versions/{major}.{minor}/bin/python{major}.{minor}"
    )
}

#[cfg(all(unix, not(target_os = "macos")))]
fn install_location(major: u8, minor: u8) -> String {
    format!("/usr/local/bin/python{}.{}", major, minor)
}

fn path_hint() -> &'static str {
    if cfg!(windows) {
        "%PATH%"
    } else {
        "$PATH"
    }
}
