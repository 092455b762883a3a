use crate::areas::repository::Repository;
use crate::artifacts::errors::NavigationError;
use crate::artifacts::reflog;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Return to the position recorded by the most recent checkout
    ///
    /// Scans the reflog for the newest checkout entry and checks out its
    /// source side, which may be a branch name or a commit ID.
    pub async fn back(&mut self) -> anyhow::Result<()> {
        let log = self.reflog().await?;
        let entry = reflog::last_checkout(&log)?.ok_or(NavigationError::NoCheckoutFound)?;

        writeln!(self.writer(), "Returning to {}", entry.from().blue())?;

        let new_head = self.checkout(entry.from()).await?;
        writeln!(
            self.writer(),
            "{}",
            format!("HEAD is now at {}", new_head.to_short_id()).green()
        )?;

        Ok(())
    }
}
