//! Shared helpers for np CLI specs.

use assert_cmd::Command;
use std::time::Duration;
use tempfile::TempDir;

/// Generous upper bound; a healthy run finishes in well under a second.
pub const SPEC_TIMEOUT: Duration = Duration::from_secs(30);

/// A scratch working directory for one spec.
pub struct Workdir {
    dir: TempDir,
}

impl Workdir {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    /// Write a file relative to the working directory.
    pub fn file(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("write file");
    }

    /// The np binary, run from this working directory with a clean
    /// environment and a watchdog timeout so a stalled protocol fails
    /// instead of hanging the suite.
    pub fn np(&self) -> Command {
        let mut cmd = Command::cargo_bin("np").expect("np binary");
        cmd.current_dir(self.dir.path())
            .env_remove("NP_OUTPUT")
            .env_remove("NP_LOG")
            .timeout(SPEC_TIMEOUT);
        cmd
    }
}
