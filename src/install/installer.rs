//! Running the platform package installer.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::config::{InstallerSpec, LauncherConfig};
use crate::error::{LauncherError, Result};
use crate::messages;
use crate::runtime::ProcessRunner;
use crate::ui::UserInterface;

use super::Downloader;

/// Puts a runtime on the machine.
///
/// Returning `Ok` only means the installer ran; whether the runtime actually
/// works is decided by retrying the candidates afterwards.
pub trait RuntimeInstaller {
    /// Download and install the runtime, reporting progress through `ui`.
    fn install(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Downloads an installer package and hands it to the platform installer.
pub struct PackageInstaller<'a> {
    spec: Option<InstallerSpec>,
    temp_dir: PathBuf,
    runner: &'a dyn ProcessRunner,
}

impl<'a> PackageInstaller<'a> {
    /// Create an installer for `spec`, downloading into `temp_dir`.
    pub fn new(
        spec: Option<InstallerSpec>,
        temp_dir: impl Into<PathBuf>,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            spec,
            temp_dir: temp_dir.into(),
            runner,
        }
    }

    /// Create an installer from the launcher configuration.
    pub fn from_config(config: &LauncherConfig, runner: &'a dyn ProcessRunner) -> Self {
        Self::new(config.installer.clone(), &config.temp_dir, runner)
    }

    /// Where the package is saved, if this platform has one.
    pub fn package_path(&self) -> Option<PathBuf> {
        self.spec
            .as_ref()
            .map(|spec| self.temp_dir.join(&spec.file_name))
    }
}

impl RuntimeInstaller for PackageInstaller<'_> {
    fn install(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let spec = self
            .spec
            .as_ref()
            .ok_or_else(|| LauncherError::InstallerUnavailable {
                platform: std::env::consts::OS.to_string(),
            })?;
        let package = self.temp_dir.join(&spec.file_name);

        ui.message(messages::DOWNLOADING);
        let downloader = Downloader::new()?;
        let mut progress = ui.start_progress(&spec.file_name);
        match downloader.download_to(&spec.url, &package, progress.as_mut()) {
            Ok(_) => progress.finish(),
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        }
        ui.message(&messages::downloaded_to(&package));

        ui.message(messages::INSTALLING);
        let mut cmd = installer_command(spec, &package);
        debug!(program = %spec.program, package = %package.display(), "running installer");
        let code = self
            .runner
            .run(&mut cmd)
            .map_err(|e| LauncherError::InstallerLaunch {
                program: spec.program.clone(),
                message: e.to_string(),
            })?;
        if code != Some(0) {
            warn!(program = %spec.program, exit_code = ?code, "installer exited unsuccessfully");
        }
        ui.message(messages::INSTALLED);

        Ok(())
    }
}

/// Build `<program> <args> <package> <trailing args>`.
///
/// On Windows the package path is passed pre-quoted so `msiexec` sees it as
/// one argument even when the temp directory contains spaces.
pub fn installer_command(spec: &InstallerSpec, package: &Path) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    append_package(&mut cmd, package);
    cmd.args(&spec.trailing_args);
    cmd
}

#[cfg(windows)]
fn append_package(cmd: &mut Command, package: &Path) {
    use std::os::windows::process::CommandExt;
    cmd.raw_arg(format!("\"{}\"", package.display()));
}

#[cfg(not(windows))]
fn append_package(cmd: &mut Command, package: &Path) {
    cmd.arg(package);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::testing::FakeRunner;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    fn spec_for(server: &MockServer) -> InstallerSpec {
        InstallerSpec {
            url: server.url("/ftp/python-2.7.1.msi"),
            ..InstallerSpec::msi()
        }
    }

    #[test]
    fn downloads_then_runs_installer() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ftp/python-2.7.1.msi");
            then.status(200).body("MSI");
        });
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::with_present(&["msiexec"]);
        let installer = PackageInstaller::new(Some(spec_for(&server)), temp.path(), &runner);
        let mut ui = MockUI::new();

        installer.install(&mut ui).unwrap();

        mock.assert();
        let package = temp.path().join("python-2.7.1.msi");
        assert_eq!(std::fs::read_to_string(&package).unwrap(), "MSI");
        assert_eq!(
            ui.messages(),
            &[
                messages::DOWNLOADING.to_string(),
                messages::downloaded_to(&package),
                messages::INSTALLING.to_string(),
                messages::INSTALLED.to_string(),
            ]
        );
        assert_eq!(ui.transfers(), &["python-2.7.1.msi"]);
        assert_eq!(
            ui.messages()
                .iter()
                .filter(|m| m.as_str() == messages::DOWNLOADING)
                .count(),
            1
        );
        assert_eq!(runner.programs(), vec!["msiexec"]);
    }

    #[test]
    fn installer_receives_quiet_flags_and_package() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ftp/python-2.7.1.msi");
            then.status(200).body("MSI");
        });
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::with_present(&["msiexec"]);
        let installer = PackageInstaller::new(Some(spec_for(&server)), temp.path(), &runner);

        installer.install(&mut MockUI::new()).unwrap();

        let (_, args) = &runner.calls()[0];
        assert_eq!(args[0], "/qn");
        assert_eq!(args[1], "/i");
        assert!(args[2].contains("python-2.7.1.msi"));
    }

    #[test]
    fn non_zero_installer_exit_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ftp/python-2.7.1.msi");
            then.status(200).body("MSI");
        });
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::with_present(&["msiexec"]).exiting_with(Some(1603));
        let installer = PackageInstaller::new(Some(spec_for(&server)), temp.path(), &runner);
        let mut ui = MockUI::new();

        installer.install(&mut ui).unwrap();
        assert!(ui.has_message(messages::INSTALLED));
    }

    #[test]
    fn missing_installer_program_is_launch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ftp/python-2.7.1.msi");
            then.status(200).body("MSI");
        });
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::with_present(&[]);
        let installer = PackageInstaller::new(Some(spec_for(&server)), temp.path(), &runner);
        let mut ui = MockUI::new();

        let err = installer.install(&mut ui).unwrap_err();
        assert!(matches!(err, LauncherError::InstallerLaunch { .. }));
        assert!(!ui.has_message(messages::INSTALLED));
    }

    #[test]
    fn failed_download_skips_installer() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ftp/python-2.7.1.msi");
            then.status(500);
        });
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::with_present(&["msiexec"]);
        let installer = PackageInstaller::new(Some(spec_for(&server)), temp.path(), &runner);
        let mut ui = MockUI::new();

        let err = installer.install(&mut ui).unwrap_err();
        assert!(matches!(err, LauncherError::Download { .. }));
        assert!(runner.programs().is_empty());
        assert_eq!(ui.messages(), &[messages::DOWNLOADING]);
    }

    #[test]
    fn no_package_for_platform_is_unavailable() {
        let runner = FakeRunner::with_present(&["msiexec"]);
        let installer = PackageInstaller::new(None, std::env::temp_dir(), &runner);
        let mut ui = MockUI::new();

        let err = installer.install(&mut ui).unwrap_err();
        assert!(matches!(err, LauncherError::InstallerUnavailable { .. }));
        assert!(ui.messages().is_empty());
        assert!(runner.programs().is_empty());
        assert_eq!(installer.package_path(), None);
    }

    #[test]
    fn from_config_uses_temp_dir() {
        let runner = FakeRunner::with_present(&[]);
        let mut config = LauncherConfig::for_base_dir(Path::new("/opt/app"));
        config.temp_dir = PathBuf::from("/scratch");
        config.installer = Some(InstallerSpec::msi());

        let installer = PackageInstaller::from_config(&config, &runner);
        assert_eq!(
            installer.package_path(),
            Some(Path::new("/scratch").join("python-2.7.1.msi"))
        );
    }

    #[test]
    fn installer_command_puts_package_last() {
        let package = Path::new("/tmp/python-2.7.1.msi");
        let cmd = installer_command(&InstallerSpec::msi(), package);
        assert_eq!(cmd.get_program(), OsStr::new("msiexec"));
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args.len(), 3);
        assert!(args[2].contains("python-2.7.1.msi"));
    }

    #[cfg(not(windows))]
    #[test]
    fn pkg_command_targets_boot_volume() {
        let package = Path::new("/tmp/python-2.7.18-macosx10.9.pkg");
        let cmd = installer_command(&InstallerSpec::pkg(), package);
        assert_eq!(cmd.get_program(), OsStr::new("installer"));
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("-pkg"),
                package.as_os_str(),
                OsStr::new("-target"),
                OsStr::new("/"),
            ]
        );
    }
}
