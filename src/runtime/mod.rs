//! Runtime discovery.
//!
//! Finds an interpreter able to run the target tool by trying each
//! candidate in a fixed order until one of them starts.
//!
//! # Modules
//!
//! - [`request`] - The tool invocation being forwarded
//! - [`runner`] - Process spawning and the candidate loop

pub mod request;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;

pub use request::InvocationRequest;
pub use runner::{try_run, ExecutionOutcome, ProcessRunner, SystemRunner};
