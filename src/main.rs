//! CMS bootstrap binary.
//!
//! Configures a CMS installation from the local dev environment and
//! hands control to the runtime. On Unix the process image is replaced
//! on success, so this binary only ever exits on its own for `--check`
//! runs and for failures.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cms_bootstrap::config::loader::load_settings;
use cms_bootstrap::lifecycle::handoff::EntrypointExec;
use cms_bootstrap::lifecycle::startup::{self, BootstrapOpts};
use cms_bootstrap::observability::init_logging;

#[derive(Parser)]
#[command(name = "cms-bootstrap")]
#[command(about = "Bootstrap configurator for a CMS installation", long_about = None)]
struct Cli {
    /// Installation base path (defaults to the working directory).
    #[arg(long)]
    base_path: Option<PathBuf>,

    /// Load and validate settings, print a summary, and exit without
    /// handing control to the runtime.
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging("cms_bootstrap=info");

    tracing::info!("cms-bootstrap v0.1.0 starting");

    if cli.check {
        return match load_settings(cli.base_path) {
            Ok(settings) => {
                tracing::info!(settings = ?settings, "Settings valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "Configuration invalid");
                ExitCode::FAILURE
            }
        };
    }

    let opts = BootstrapOpts {
        base_path: cli.base_path,
    };
    match startup::run(opts, &EntrypointExec) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Bootstrap failed");
            ExitCode::FAILURE
        }
    }
}
