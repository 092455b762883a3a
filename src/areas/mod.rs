//! Repository-level components
//!
//! This module contains the pieces that talk to the actual git repository:
//!
//! - `git`: the process executor wrapping the `git` binary
//! - `repository`: high-level repository operations and coordination

pub(crate) mod git;
pub mod repository;
