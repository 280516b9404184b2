//! waf-launcher entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use waf_launcher::config::{LauncherConfig, Settings};
use waf_launcher::install::PackageInstaller;
use waf_launcher::runtime::{InvocationRequest, SystemRunner};
use waf_launcher::ui::create_ui;

/// Exit status when the launcher cannot locate itself.
const STARTUP_FAILURE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `WAF_LAUNCHER_DEBUG` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout belongs to the target tool.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("waf_launcher=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("waf_launcher=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let settings = Settings::from_env();
    init_tracing(settings.debug);

    let mut ui = create_ui(&settings);

    let config = match LauncherConfig::discover() {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(STARTUP_FAILURE);
        }
    };

    let request = InvocationRequest::from_env(config.tool_path());
    tracing::debug!(tool = %request.tool().display(), args = ?request.args(), "launcher starting");

    let runner = SystemRunner;
    let installer = PackageInstaller::from_config(&config, &runner);

    let outcome = waf_launcher::launch(&request, &config, ui.as_mut(), &runner, &installer);
    ExitCode::from(outcome.exit_code())
}
