//! Process executor for the `git` binary
//!
//! All repository state is read and written through the real `git`
//! executable. Invocations are issued and awaited one at a time; a non-zero
//! exit status carries the verbatim stderr of the failed command.

use crate::artifacts::errors::NavigationError;
use anyhow::Context;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

pub struct GitCli {
    path: Box<Path>,
    verbose: bool,
}

impl GitCli {
    /// `verbose` echoes each invocation to stderr before it runs, the
    /// subprocess equivalent of a shell's `set -x`
    pub fn new(path: Box<Path>, verbose: bool) -> Self {
        Self { path, verbose }
    }

    /// Execute a git command in the repository directory and return its
    /// trimmed stdout
    pub async fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        if self.verbose {
            eprintln!("+ git {}", args.join(" "));
        }

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .context("failed to execute git")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NavigationError::ProcessExecution {
                command: format!("git {}", args.join(" ")),
                stderr: stderr.trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
