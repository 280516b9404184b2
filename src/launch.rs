//! The launcher control flow.
//!
//! Run the target tool with the first interpreter that starts. If none does
//! and this platform has an installer package, ask the operator, install, and
//! retry exactly once. Without a package only the guidance is printed.

use tracing::debug;

use crate::config::LauncherConfig;
use crate::install::{prompt_install, InstallDecision, RuntimeInstaller};
use crate::messages;
use crate::runtime::{try_run, ExecutionOutcome, InvocationRequest, ProcessRunner};
use crate::ui::UserInterface;

/// How a launcher run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A runtime started the target tool.
    Ran,
    /// No runtime was found and nothing was installed, either because the
    /// operator said no or because no installer exists for this platform.
    Declined,
    /// The install did not yield a working runtime.
    InstallationIneffective {
        /// Why the installer failed, when it failed outright.
        cause: Option<String>,
    },
}

impl LaunchOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchOutcome::Ran | LaunchOutcome::Declined => 0,
            LaunchOutcome::InstallationIneffective { .. } => 1,
        }
    }
}

/// Run `request`, installing a runtime first if the operator agrees.
pub fn launch(
    request: &InvocationRequest,
    config: &LauncherConfig,
    ui: &mut dyn UserInterface,
    runner: &dyn ProcessRunner,
    installer: &dyn RuntimeInstaller,
) -> LaunchOutcome {
    let candidates = config.candidates();

    if try_run(request, &candidates, runner) == ExecutionOutcome::Succeeded {
        return LaunchOutcome::Ran;
    }

    if !config.can_install() {
        debug!("no installer package for this platform");
        return decline(config, ui);
    }

    if prompt_install(ui) == InstallDecision::No {
        debug!("automatic install declined");
        return decline(config, ui);
    }

    if let Err(e) = installer.install(ui) {
        debug!(error = ?e, "runtime installation failed");
        let cause = e.to_string();
        ui.message(&messages::installation_failed(&cause));
        return LaunchOutcome::InstallationIneffective { cause: Some(cause) };
    }

    match try_run(request, &candidates, runner) {
        ExecutionOutcome::Succeeded => LaunchOutcome::Ran,
        ExecutionOutcome::NotFound => {
            ui.message(messages::NOT_WORKING);
            LaunchOutcome::InstallationIneffective { cause: None }
        }
    }
}

fn decline(config: &LauncherConfig, ui: &mut dyn UserInterface) -> LaunchOutcome {
    for line in messages::guidance(config) {
        ui.message(&line);
    }
    LaunchOutcome::Declined
}
