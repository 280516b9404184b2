//! Operator-facing text.
//!
//! These strings are a stable contract: scripts and tests match on them.

use std::path::Path;

use crate::config::LauncherConfig;

/// Consent prompt shown when no runtime could be started.
pub const INSTALL_PROMPT: &str = "Download and install python [Y/n]? ";

/// Printed before the installer download starts.
pub const DOWNLOADING: &str = "Downloading python 2.7";

/// Printed before the package installer runs.
pub const INSTALLING: &str = "Installing python";

/// Printed after the package installer exits.
pub const INSTALLED: &str = "Python is now installed";

/// Printed when the post-install retry still finds no runtime.
pub const NOT_WORKING: &str = "Python not fully working";

/// Last guidance line on platforms with an automatic install.
pub const RETRY_HINT: &str = "or run this command again and answer yes";

/// Printed after the installer package has been written.
pub fn downloaded_to(path: &Path) -> String {
    format!("python2.7 downloaded to {}", path.display())
}

/// Printed when the download or the installer itself failed.
pub fn installation_failed(cause: &str) -> String {
    format!("Python installation failed: {}", cause)
}

/// Guidance shown when no runtime will be installed automatically.
///
/// The "answer yes" hint only appears where an automatic install exists.
pub fn guidance(config: &LauncherConfig) -> Vec<String> {
    let mut lines = vec![
        "Not automatically installing Python".to_string(),
        format!(
            "Please download and install {}",
            config.manual_download_url
        ),
        format!(
            "or if you have python installed make sure it is on {}",
            config.path_hint
        ),
    ];
    if config.can_install() {
        lines.push(RETRY_HINT.to_string());
    }
    lines
}
