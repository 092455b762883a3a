//! Step-by-step navigation through a branch's linear commit history.
//!
//! The crate wraps the `git` binary rather than reimplementing it: every
//! operation shells out, parses the plain-text output, and checks out the
//! computed target commit. `commands` holds the user-facing subcommands,
//! `areas` the repository facade and the git process executor, and
//! `artifacts` the domain types and the navigation logic itself.

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::history::{Direction, ViewOptions};
