use crate::areas::git::GitCli;
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::errors::NavigationError;
use crate::artifacts::history::History;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// High-level view of the git repository the tool runs in
///
/// Owns the process executor and the output writer; the command
/// implementations in `commands/` are `impl Repository` blocks built on
/// the operations below. Everything is read fresh from git on each call,
/// nothing is cached.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    git: GitCli,
}

impl Repository {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        verbose: bool,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let git = GitCli::new(path.clone().into_boxed_path(), verbose);

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            git,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Names of the local branches, per `git branch`
    ///
    /// The current-branch marker (`*`), the worktree marker (`+`) and the
    /// detached-HEAD pseudo entry are stripped from the listing.
    pub async fn local_branches(&self) -> anyhow::Result<Vec<String>> {
        let output = self.git.run(&["branch"]).await?;

        Ok(output
            .lines()
            .map(|line| line.trim_start_matches(['*', '+']).trim())
            .filter(|name| !name.is_empty() && !name.starts_with('('))
            .map(str::to_string)
            .collect())
    }

    /// Full oldest-first commit history of a local branch
    pub async fn history(&self, branch: &str) -> anyhow::Result<History> {
        let branches = self.local_branches().await?;
        if !branches.iter().any(|name| name == branch) {
            return Err(NavigationError::BranchNotFound(branch.to_string()).into());
        }

        let log = self
            .git
            .run(&["log", "--reverse", "--pretty=%H", branch])
            .await?;

        History::try_parse(&log)
    }

    /// The currently checked-out commit
    pub async fn head(&self) -> anyhow::Result<CommitId> {
        let output = self.git.run(&["rev-parse", "HEAD"]).await?;
        CommitId::try_parse(output)
    }

    /// Check out a target and report the commit HEAD landed on
    ///
    /// The target may be a commit ID, a prefix, or a branch name; git
    /// resolves it. On failure the underlying error is propagated verbatim
    /// and HEAD is left where it was.
    pub async fn checkout(&self, target: &str) -> anyhow::Result<CommitId> {
        self.git.run(&["checkout", target]).await?;
        self.head().await
    }

    /// Raw reflog contents, newest first
    pub async fn reflog(&self) -> anyhow::Result<String> {
        self.git.run(&["reflog"]).await
    }
}
