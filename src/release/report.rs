//! Structured outcome of a release run.

use crate::types::TransportId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Result of one release step for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepOutcome {
    /// The step completed.
    Succeeded,
    /// The step failed; the run carried on.
    Failed { reason: String },
}

impl StepOutcome {
    /// Reduce a step result to its outcome.
    pub fn from_result<E: fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Succeeded,
            Err(e) => Self::Failed {
                reason: e.to_string(),
            },
        }
    }

    /// Check if the step succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "ok"),
            Self::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// Both release steps for one requested serial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceOutcome {
    /// Serial the release was requested for.
    pub serial: String,
    /// Local transport, if the device was attached and resolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportId>,
    /// Local disconnect.
    pub disconnect: StepOutcome,
    /// Remote deregistration.
    pub deregister: StepOutcome,
}

impl DeviceOutcome {
    /// Check if both steps succeeded.
    pub fn is_released(&self) -> bool {
        self.disconnect.is_success() && self.deregister.is_success()
    }
}

/// Per-device outcomes of a whole run, in request order.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the last device was processed.
    pub finished_at: DateTime<Utc>,
    /// One entry per requested serial.
    pub outcomes: Vec<DeviceOutcome>,
}

impl ReleaseReport {
    /// Start an empty report.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: Utc::now(),
            outcomes: Vec::new(),
        }
    }

    /// Finalize the report with the device outcomes.
    pub fn finish(mut self, outcomes: Vec<DeviceOutcome>) -> Self {
        self.finished_at = Utc::now();
        self.outcomes = outcomes;
        self
    }

    /// Number of requested devices.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of devices where both steps succeeded.
    pub fn released(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_released()).count()
    }

    /// Number of devices with at least one failed step.
    pub fn failed(&self) -> usize {
        self.total() - self.released()
    }

    /// Number of devices the inventory service did not confirm removing.
    pub fn deregistration_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.deregister.is_success())
            .count()
    }

    /// Check if any step failed for any device.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Run duration in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

impl Default for ReleaseReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(serial: &str, disconnect: bool, deregister: bool) -> DeviceOutcome {
        let step = |ok: bool| {
            if ok {
                StepOutcome::Succeeded
            } else {
                StepOutcome::Failed {
                    reason: "boom".to_string(),
                }
            }
        };
        DeviceOutcome {
            serial: serial.to_string(),
            transport: None,
            disconnect: step(disconnect),
            deregister: step(deregister),
        }
    }

    #[test]
    fn test_report_counts() {
        let report = ReleaseReport::new().finish(vec![
            outcome("a", true, true),
            outcome("b", false, true),
            outcome("c", true, false),
        ]);

        assert_eq!(report.total(), 3);
        assert_eq!(report.released(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.deregistration_failures(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn test_empty_report_has_no_failures() {
        let report = ReleaseReport::new().finish(Vec::new());
        assert!(!report.has_failures());
        assert!(report.duration_ms() >= 0);
    }

    #[test]
    fn test_step_outcome_from_result() {
        assert!(StepOutcome::from_result::<String>(Ok(())).is_success());
        assert_eq!(
            StepOutcome::from_result(Err("no route")),
            StepOutcome::Failed {
                reason: "no route".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(outcome("a", false, true)).unwrap();
        assert_eq!(json["serial"], "a");
        assert_eq!(json["disconnect"]["status"], "failed");
        assert_eq!(json["disconnect"]["reason"], "boom");
        assert_eq!(json["deregister"]["status"], "succeeded");
        assert!(json.get("transport").is_none());
    }
}
