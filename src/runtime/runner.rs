//! Process spawning and the candidate loop.

use std::io;
use std::process::Command;

use tracing::{debug, info};

use super::InvocationRequest;

/// Result of trying to run the target tool.
///
/// Only whether a runtime *started* matters here. A runtime that started and
/// exited non-zero still counts as `Succeeded`; interpreting the tool's own
/// exit status is not the launcher's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// A candidate started and ran to completion.
    Succeeded,
    /// No candidate could be started.
    NotFound,
}

/// Spawns a command and blocks until it exits.
pub trait ProcessRunner {
    /// Run `cmd` to completion, returning its exit code (`None` if killed by a
    /// signal). An `Err` means the process never started.
    fn run(&self, cmd: &mut Command) -> io::Result<Option<i32>>;
}

/// Runs commands as real child processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, cmd: &mut Command) -> io::Result<Option<i32>> {
        cmd.status().map(|status| status.code())
    }
}

/// Try each candidate runtime in order until one starts.
///
/// Spawn failures of any kind skip to the next candidate. The first
/// candidate that starts ends the loop.
pub fn try_run(
    request: &InvocationRequest,
    candidates: &[String],
    runner: &dyn ProcessRunner,
) -> ExecutionOutcome {
    for candidate in candidates {
        let mut cmd = candidate_command(candidate, request);
        match runner.run(&mut cmd) {
            Ok(code) => {
                info!(runtime = %candidate, exit_code = ?code, "target tool ran");
                return ExecutionOutcome::Succeeded;
            }
            Err(e) => {
                debug!(runtime = %candidate, error = %e, "runtime could not be started");
            }
        }
    }

    debug!(tried = candidates.len(), "no runtime could be started");
    ExecutionOutcome::NotFound
}

/// Build `candidate <tool> [<joined args>]`.
pub fn candidate_command(candidate: &str, request: &InvocationRequest) -> Command {
    let mut cmd = Command::new(candidate);
    cmd.arg(request.tool());
    if let Some(joined) = request.forwarded_args() {
        cmd.arg(joined);
    }
    cmd
}
