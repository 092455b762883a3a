use crate::areas::repository::Repository;
use crate::artifacts::history::ViewOptions;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Check out another commit of the branch's history
    ///
    /// Narrates where the navigation starts from, resolves the target
    /// (hash prefix over direction), and reports where HEAD ends up.
    pub async fn view(&mut self, opts: &ViewOptions) -> anyhow::Result<()> {
        let history = self.history(&opts.branch).await?;
        writeln!(
            self.writer(),
            "Browsing history of branch '{}' ({} commits)",
            opts.branch.blue().bold(),
            history.len()
        )?;

        let head = self.head().await?;
        writeln!(self.writer(), "HEAD is at {}", head.to_short_id().blue())?;

        let target = history.resolve(&head, opts)?.clone();
        let new_head = self.checkout(target.as_ref()).await?;

        writeln!(
            self.writer(),
            "{}",
            format!("HEAD is now at {}", new_head.to_short_id()).green()
        )?;

        Ok(())
    }
}
