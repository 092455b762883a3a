//! Commit history of a single branch and target resolution
//!
//! A `History` is the full oldest-first commit sequence of one branch, as
//! printed by `git log --reverse --pretty=%H`. It is rebuilt on every
//! invocation and never cached. `History::resolve` turns a [`ViewOptions`]
//! and the current HEAD into the commit to check out.

use crate::artifacts::commit_id::CommitId;
use crate::artifacts::errors::NavigationError;
use clap::ValueEnum;

/// Where to move relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// One commit towards the oldest end of the branch
    Prev,
    /// One commit towards the newest end of the branch
    Next,
    /// The oldest commit of the branch
    First,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Prev => "prev",
            Direction::Next => "next",
            Direction::First => "first",
        };
        write!(f, "{}", name)
    }
}

/// Options of the `view` command
///
/// A hash prefix, when present, takes priority over the direction.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub branch: String,
    pub direction: Option<Direction>,
    pub hash: Option<String>,
}

/// Oldest-first commit sequence of one branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    commits: Vec<CommitId>,
}

impl History {
    /// Parse the output of `git log --reverse --pretty=%H`, one full
    /// commit ID per line, oldest first
    pub fn try_parse(log_output: &str) -> anyhow::Result<Self> {
        let commits = log_output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| CommitId::try_parse(line.to_string()))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { commits })
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Index of the given commit in the sequence, by exact match
    pub fn position_of(&self, id: &CommitId) -> Option<usize> {
        self.commits.iter().position(|commit| commit == id)
    }

    /// The oldest commit whose ID starts with the given prefix
    pub fn commit_by_prefix(&self, prefix: &str) -> Option<&CommitId> {
        self.commits
            .iter()
            .find(|commit| commit.matches_prefix(prefix))
    }

    /// Resolve the commit to check out
    ///
    /// A hash prefix wins over a direction. `first` does not depend on the
    /// current position; `prev`/`next` require HEAD to be part of the
    /// sequence and fail with an explicit out-of-range error at either end
    /// of the history.
    pub fn resolve(&self, head: &CommitId, opts: &ViewOptions) -> anyhow::Result<&CommitId> {
        if let Some(prefix) = &opts.hash {
            return self
                .commit_by_prefix(prefix)
                .ok_or_else(|| NavigationError::CommitNotFound(prefix.clone()).into());
        }

        let direction = opts
            .direction
            .ok_or_else(|| anyhow::anyhow!("either a direction or a hash prefix is required"))?;

        match direction {
            Direction::First => self
                .commits
                .first()
                .ok_or_else(|| anyhow::anyhow!("branch '{}' has no commits", opts.branch)),
            direction => {
                let position =
                    self.position_of(head)
                        .ok_or_else(|| NavigationError::HeadNotOnBranch {
                            head: head.to_short_id(),
                            branch: opts.branch.clone(),
                        })?;

                let target = match direction {
                    Direction::Prev => position.checked_sub(1),
                    _ => Some(position + 1),
                };

                target
                    .and_then(|index| self.commits.get(index))
                    .ok_or_else(|| NavigationError::OutOfRange { direction }.into())
            }
        }
    }
}
