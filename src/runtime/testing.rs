//! Recording process runner shared by unit tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::process::Command;

use super::ProcessRunner;

/// Starts only programs it has been told are present; records every attempt.
#[derive(Debug)]
pub(crate) struct FakeRunner {
    present: RefCell<HashSet<String>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
    exit_code: Option<i32>,
}

impl FakeRunner {
    pub(crate) fn with_present(programs: &[&str]) -> Self {
        Self {
            present: RefCell::new(programs.iter().map(|p| p.to_string()).collect()),
            calls: RefCell::new(Vec::new()),
            exit_code: Some(0),
        }
    }

    pub(crate) fn exiting_with(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    /// Make `program` startable from now on.
    pub(crate) fn make_present(&self, program: &str) {
        self.present.borrow_mut().insert(program.to_string());
    }

    /// Every attempted invocation as (program, args).
    pub(crate) fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }

    /// Programs attempted, in order.
    pub(crate) fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(p, _)| p.clone()).collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, cmd: &mut Command) -> io::Result<Option<i32>> {
        let program = cmd.get_program().to_string_lossy().into_owned();
        let args = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.calls.borrow_mut().push((program.clone(), args));

        if self.present.borrow().contains(&program) {
            Ok(self.exit_code)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "program not found"))
        }
    }
}
