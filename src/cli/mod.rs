//! CLI definitions.
//!
//! Every input can come from a flag or from the environment variable the
//! pipeline step exports:
//! - `stf_host_url` - base URL of the device-control service
//! - `stf_access_token` - API access token
//! - `stf_device_serial_list` - JSON array of serials to release

mod release;

use crate::output::OutputFormat;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Release checked-out device-farm devices.
///
/// Disconnects each device from the local adb server and removes it from
/// the user's device list on the device-control service. Per-device
/// failures are reported but never stop the batch.
#[derive(Parser, Debug)]
#[command(name = "devfarm-release")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Release device-farm devices after a test run", long_about = None)]
pub struct Cli {
    /// Base URL of the device-control service
    #[arg(long, env = "stf_host_url", default_value = "", value_name = "URL")]
    pub host_url: String,

    /// Access token for the device-control API
    #[arg(
        long,
        env = "stf_access_token",
        default_value = "",
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    pub access_token: String,

    /// JSON array of device serials to release (e.g. '["R58M1234", "emulator"]')
    #[arg(
        long = "serials",
        env = "stf_device_serial_list",
        default_value = "",
        value_name = "JSON"
    )]
    pub serial_list: String,

    /// Inventory request timeout in seconds
    #[arg(
        short = 't',
        long = "timeout",
        env = "stf_request_timeout",
        default_value = "30",
        value_name = "SECS"
    )]
    pub timeout: u64,

    /// adb executable to use
    #[arg(long, env = "ADB_PATH", default_value = "adb", value_name = "PATH")]
    pub adb: PathBuf,

    /// Host of a non-local adb server
    #[arg(long, value_name = "HOST")]
    pub adb_server_host: Option<String>,

    /// Port of a non-local adb server
    #[arg(long, value_name = "PORT")]
    pub adb_server_port: Option<u16>,

    /// Exit with status 3 if any device could not be deregistered
    /// (accepts true/false, yes/no, 1/0, on/off)
    #[arg(
        long,
        env = "stf_fail_on_partial_release",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub fail_on_partial: bool,

    /// Output format for the release report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
