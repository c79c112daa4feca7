//! Release command implementation.

use crate::cli::Cli;
use crate::config::ReleaseConfig;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use crate::release::{ReleaseOrchestrator, ReleaseReport};
use crate::remote::RemoteDeregistrar;
use crate::transport::AdbBridge;
use std::time::Duration;

impl Cli {
    /// Build the release configuration from the parsed inputs.
    ///
    /// The configuration is dumped before it is validated.
    pub fn release_config(&self) -> CliResult<ReleaseConfig> {
        let config = ReleaseConfig::load(&self.host_url, &self.access_token, &self.serial_list)
            .map_err(CliError::Config)?
            .with_request_timeout(Duration::from_secs(self.timeout));

        config.dump();
        config.validate().map_err(CliError::Validation)?;
        Ok(config)
    }

    /// Run the release.
    ///
    /// Only configuration problems fail the command, unless
    /// `--fail-on-partial` is set and some device could not be
    /// deregistered.
    pub async fn execute(&self) -> CliResult<ReleaseReport> {
        let config = self.release_config()?;

        let bridge = AdbBridge::new(&self.adb)
            .with_server(self.adb_server_host.as_deref(), self.adb_server_port);
        let deregistrar = RemoteDeregistrar::from_config(&config)?;

        let report = ReleaseOrchestrator::new(&bridge, &deregistrar)
            .run(&config.serials)
            .await;

        output::print_report(&report, self.output)?;
        if !self.quiet && self.output == OutputFormat::Plain && !report.has_failures() {
            output::print_success("All requested devices released");
        }

        check_partial_failure(&report, self.fail_on_partial)?;
        Ok(report)
    }
}

/// Turn deregistration failures into an error when asked to.
fn check_partial_failure(report: &ReleaseReport, fail_on_partial: bool) -> CliResult<()> {
    let failed = report.deregistration_failures();
    if fail_on_partial && failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: report.total(),
        });
    }
    Ok(())
}
