//! The tool invocation being forwarded.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A request to run the target tool with the operator's arguments.
///
/// Arguments are forwarded as one space-joined token and are not
/// shell-escaped: an argument containing whitespace will not survive as a
/// single token downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    tool: PathBuf,
    args: Vec<String>,
}

impl InvocationRequest {
    /// Create a request for `tool` with the given arguments.
    pub fn new(tool: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            tool: tool.into(),
            args,
        }
    }

    /// Create a request from the launcher's own process arguments.
    pub fn from_env(tool: impl Into<PathBuf>) -> Self {
        Self::from_os_args(tool, std::env::args_os().skip(1))
    }

    /// Create a request from raw OS arguments, converting lossily.
    pub fn from_os_args<I>(tool: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        Self::new(tool, args)
    }

    /// Path of the target tool.
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Arguments in the order they were given.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The arguments joined with single spaces, or `None` when there are none.
    pub fn forwarded_args(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_arguments_with_single_spaces() {
        let request = InvocationRequest::new("/opt/waf", vec!["build".into(), "-v".into()]);
        assert_eq!(request.forwarded_args().as_deref(), Some("build -v"));
    }

    #[test]
    fn preserves_argument_order() {
        let request = InvocationRequest::new(
            "/opt/waf",
            vec!["configure".into(), "build".into(), "install".into()],
        );
        assert_eq!(
            request.forwarded_args().as_deref(),
            Some("configure build install")
        );
    }

    #[test]
    fn embedded_whitespace_is_not_escaped() {
        let request = InvocationRequest::new("/opt/waf", vec!["--prefix=/a b".into(), "x".into()]);
        assert_eq!(request.forwarded_args().as_deref(), Some("--prefix=/a b x"));
    }

    #[test]
    fn no_arguments_forwards_nothing() {
        let request = InvocationRequest::new("/opt/waf", vec![]);
        assert_eq!(request.forwarded_args(), None);
    }

    #[test]
    fn from_os_args_keeps_everything() {
        let request = InvocationRequest::from_os_args(
            "/opt/waf",
            vec![OsString::from("--help"), OsString::from("--")],
        );
        assert_eq!(request.args(), &["--help", "--"]);
        assert_eq!(request.tool(), Path::new("/opt/waf"));
    }
}
