//! Plain text output formatting.
//!
//! Produces a human-readable release summary with colors.

use crate::release::{ReleaseReport, StepOutcome};
use console::style;
use std::io::{self, Write};

/// Print the report in human-readable plain text format.
pub fn print_plain(report: &ReleaseReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, report)
}

fn write_plain<W: Write>(out: &mut W, report: &ReleaseReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    )?;
    writeln!(out, "                    {}", style("Device Release").cyan().bold())?;
    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    )?;
    writeln!(out)?;

    if report.outcomes.is_empty() {
        writeln!(out, "  {}", style("No devices requested.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "  {:<24} {:<22} {:<12} {:<12}",
        style("SERIAL").bold().underlined(),
        style("TRANSPORT").bold().underlined(),
        style("DISCONNECT").bold().underlined(),
        style("DEREGISTER").bold().underlined()
    )?;

    for outcome in &report.outcomes {
        let transport = outcome
            .transport
            .as_ref()
            .map(|t| t.as_str())
            .unwrap_or("-");
        writeln!(
            out,
            "  {:<24} {:<22} {} {}",
            truncate_string(&outcome.serial, 24),
            truncate_string(transport, 22),
            step_label(&outcome.disconnect),
            step_label(&outcome.deregister)
        )?;
    }

    let failures: Vec<_> = report
        .outcomes
        .iter()
        .flat_map(|o| {
            [("disconnect", &o.disconnect), ("deregister", &o.deregister)]
                .into_iter()
                .filter_map(move |(step, outcome)| match outcome {
                    StepOutcome::Failed { reason } => Some((o.serial.as_str(), step, reason)),
                    StepOutcome::Succeeded => None,
                })
        })
        .collect();

    if !failures.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {}", style("Failures:").bold())?;
        for (serial, step, reason) in failures {
            writeln!(out, "    {} {} {}: {}", style("•").dim(), serial, step, reason)?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "  {} {} of {} devices released in {:.2}s",
        style("Summary:").bold(),
        style(report.released()).green().bold(),
        report.total(),
        report.duration_ms() as f64 / 1000.0
    )?;
    if report.has_failures() {
        writeln!(
            out,
            "           {} with failed steps",
            style(report.failed()).red().bold()
        )?;
    }
    writeln!(out)?;

    Ok(())
}

/// Padded before styling so escape codes don't break column alignment.
fn step_label(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Succeeded => style(format!("{:<12}", "ok")).green().to_string(),
        StepOutcome::Failed { .. } => style(format!("{:<12}", "failed")).red().to_string(),
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Truncate a string to a maximum length, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::DeviceOutcome;
    use crate::types::TransportId;

    fn render(report: &ReleaseReport) -> String {
        let mut buf = Vec::new();
        write_plain(&mut buf, report).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }

    #[test]
    fn test_plain_lists_failures() {
        let report = ReleaseReport::new().finish(vec![
            DeviceOutcome {
                serial: "SER-1".to_string(),
                transport: Some(TransportId::new("usb-1")),
                disconnect: StepOutcome::Succeeded,
                deregister: StepOutcome::Succeeded,
            },
            DeviceOutcome {
                serial: "SER-2".to_string(),
                transport: None,
                disconnect: StepOutcome::Failed {
                    reason: "device has no known transport".to_string(),
                },
                deregister: StepOutcome::Succeeded,
            },
        ]);

        let text = render(&report);
        assert!(text.contains("usb-1"));
        assert!(text.contains("SER-2 disconnect: device has no known transport"));
        assert!(text.contains("1 of 2 devices released"));
    }

    #[test]
    fn test_plain_empty_report() {
        let text = render(&ReleaseReport::new().finish(Vec::new()));
        assert!(text.contains("No devices requested."));
    }
}
