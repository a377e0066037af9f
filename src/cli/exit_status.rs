use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): all outputs generated (or up to date in check mode)
/// - `Failure` (1): a file failed, or check mode found stale outputs
/// - `Error` (2): the run could not start (config error, bad pattern, no inputs)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All outputs generated or up to date.
    Success,
    /// At least one file failed or is stale.
    Failure,
    /// Internal error before any file was processed.
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
