//! waf-launcher - Bootstrap launcher for the waf build tool.
//!
//! The launcher sits next to a `waf` script and runs it with the first Python
//! interpreter that starts. When none does, it offers to download and install
//! one, then tries again exactly once.
//!
//! # Modules
//!
//! - [`config`] - Launcher directory, candidate runtimes, operator switches
//! - [`error`] - Error types and result aliases
//! - [`install`] - Consent prompt, installer download and execution
//! - [`launch`] - The top-level control flow
//! - [`messages`] - Operator-facing text
//! - [`runtime`] - Candidate runtimes and process spawning
//! - [`ui`] - Prompts, progress bars and terminal output
//!
//! # Example
//!
//! ```
//! use waf_launcher::runtime::InvocationRequest;
//!
//! let request = InvocationRequest::new("/opt/project/waf", vec!["build".into(), "-v".into()]);
//! assert_eq!(request.forwarded_args().as_deref(), Some("build -v"));
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod launch;
pub mod messages;
pub mod runtime;
pub mod ui;

pub use error::{LauncherError, Result};
pub use launch::{launch, LaunchOutcome};
