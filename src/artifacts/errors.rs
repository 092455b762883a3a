use crate::artifacts::history::Direction;
use thiserror::Error;

/// Failure modes of a navigation command
///
/// Every variant is terminal for the current invocation: the error is
/// surfaced at the top level, printed, and the process exits non-zero.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("branch '{0}' not found among local branches")]
    BranchNotFound(String),
    #[error("no commit starting with '{0}' on this branch")]
    CommitNotFound(String),
    #[error("no commit in the '{direction}' direction from the current position")]
    OutOfRange { direction: Direction },
    #[error("HEAD ({head}) is not part of branch '{branch}'")]
    HeadNotOnBranch { head: String, branch: String },
    #[error("no checkout entry found in the reflog")]
    NoCheckoutFound,
    #[error("{command} failed: {stderr}")]
    ProcessExecution { command: String, stderr: String },
}
