use std::process::ExitCode;

use crate::core::SyncOutcome;

/// Exit status of a sync run.
///
/// - `Success` (0): registry written, or in sync under `--check`
/// - `Failure` (1): `--check` found the registry out of sync
/// - `Error` (1): the run aborted
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&SyncOutcome> for ExitStatus {
    fn from(outcome: &SyncOutcome) -> Self {
        match outcome {
            SyncOutcome::OutOfSync { .. } => ExitStatus::Failure,
            SyncOutcome::Created | SyncOutcome::Updated { .. } | SyncOutcome::InSync => {
                ExitStatus::Success
            }
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure | ExitStatus::Error => ExitCode::from(1),
        }
    }
}
