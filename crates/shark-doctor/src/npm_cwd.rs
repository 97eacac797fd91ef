//! npm working-directory consistency check
//!
//! A misconfigured shell (commonly a Windows `AutoRun` entry) can make a
//! freshly spawned npm process run somewhere other than the caller's
//! working directory, which breaks the install step in confusing ways.
//! `npm config list` reports the cwd npm actually sees; spawning it is
//! the only reliable reproduction.

use camino::Utf8Path;
use shark_core::ProcessRunner;
use tracing::debug;

/// The line `npm config list` prints its working directory on
const CWD_PREFIX: &str = "; cwd = ";

/// Remediation hint for the usual Windows cause
pub const WINDOWS_CWD_REMEDIATION: &str = "On Windows, this can usually be fixed by running:\n\n  \
    reg delete \"HKCU\\Software\\Microsoft\\Command Processor\" /v AutoRun /f\n  \
    reg delete \"HKLM\\Software\\Microsoft\\Command Processor\" /v AutoRun /f\n\n\
    Try to run the above two lines in the terminal.";

/// Outcome of the npm working-directory check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CwdCheck {
    /// npm sees the same directory the process is in
    Consistent,
    /// npm reports a different working directory
    Mismatch {
        /// The directory a newly started npm process runs in
        npm_cwd: String,
    },
    /// The check could not be performed; treated as passing
    Unknown,
}

impl CwdCheck {
    /// Whether the pipeline may proceed on this outcome
    pub fn is_ok(&self) -> bool {
        !matches!(self, CwdCheck::Mismatch { .. })
    }
}

/// Verify that a spawned npm process reports the expected working
/// directory. Spawn failures and unrecognized output pass: the check is
/// best-effort and a later install failure will surface the real error.
pub async fn npm_can_read_cwd(runner: &dyn ProcessRunner, expected: &Utf8Path) -> CwdCheck {
    let output = match runner.run("npm", &["config", "list"], Some(expected)).await {
        Ok(output) => output,
        Err(e) => {
            debug!("Could not spawn npm for the cwd check: {}", e);
            return CwdCheck::Unknown;
        }
    };

    match parse_npm_cwd(&output.stdout) {
        Some(npm_cwd) if npm_cwd == expected.as_str() => CwdCheck::Consistent,
        Some(npm_cwd) => CwdCheck::Mismatch { npm_cwd },
        None => CwdCheck::Unknown,
    }
}

/// Extract the cwd line from `npm config list` output
fn parse_npm_cwd(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.starts_with(CWD_PREFIX))
        .map(|line| line[CWD_PREFIX.len()..].to_string())
}
