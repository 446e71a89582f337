use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Every target was written (warnings allowed)
/// - `Failure` (1): At least one target could not be loaded or written
/// - `Error` (2): The run was aborted before writing anything (malformed source
///   catalog, unreadable synonym file, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every target was written.
    Success,
    /// Some targets failed; the others were written.
    Failure,
    /// Fatal error, nothing written.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
