//! adb-backed [`DeviceBridge`] implementation.
//!
//! Runs the adb executable as a child process for every call and waits
//! for it to exit. There is no timeout; a hung adb hangs the run.

use crate::error::{CommandError, CommandResult};
use crate::transport::DeviceBridge;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;

/// Bridge that shells out to adb.
#[derive(Debug, Clone)]
pub struct AdbBridge {
    program: PathBuf,
    global_args: Vec<String>,
}

impl AdbBridge {
    /// Create a bridge running the given adb executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            global_args: Vec::new(),
        }
    }

    /// Talk to an adb server other than the local default.
    pub fn with_server(mut self, host: Option<&str>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.global_args.extend(["-H".to_string(), host.to_string()]);
        }
        if let Some(port) = port {
            self.global_args.extend(["-P".to_string(), port.to_string()]);
        }
        self
    }

    /// Add an argument placed before every subcommand.
    #[cfg(test)]
    pub(crate) fn with_global_arg(mut self, arg: impl Into<String>) -> Self {
        self.global_args.push(arg.into());
        self
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    async fn run(&self, args: &[&str]) -> CommandResult<Output> {
        tracing::debug!(program = %self.program.display(), ?args, "running adb");

        Command::new(&self.program)
            .args(&self.global_args)
            .args(args)
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                program: self.program_name(),
                source,
            })
    }

    fn check(&self, args: &[&str], output: &Output) -> CommandResult<()> {
        if output.status.success() {
            return Ok(());
        }

        Err(CommandError::Failed {
            program: self.program_name(),
            args: args.join(" "),
            status: output.status.to_string(),
            output: combined_output(output),
        })
    }
}

impl Default for AdbBridge {
    fn default() -> Self {
        Self::new("adb")
    }
}

#[async_trait]
impl DeviceBridge for AdbBridge {
    async fn list_devices(&self) -> CommandResult<String> {
        let args = ["devices"];
        let output = self.run(&args).await?;
        self.check(&args, &output)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn query_serial(&self, transport: &str) -> CommandResult<String> {
        let args = ["-s", transport, "shell", "getprop", "ro.serialno"];
        let output = self.run(&args).await?;
        self.check(&args, &output)?;

        let serial = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if serial.is_empty() {
            return Err(CommandError::EmptySerial {
                program: self.program_name(),
                transport: transport.to_string(),
            });
        }
        Ok(serial)
    }

    async fn disconnect(&self, transport: &str) -> CommandResult<()> {
        // `adb disconnect` without a target drops every TCP device.
        if transport.is_empty() {
            return Err(CommandError::MissingTarget);
        }

        let args = ["disconnect", transport];
        let output = self.run(&args).await?;
        self.check(&args, &output)
    }
}

/// Stdout followed by stderr, trimmed.
fn combined_output(output: &Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined.trim().to_string()
}
