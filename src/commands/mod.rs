//! Command implementations
//!
//! One module per subcommand, each an `impl Repository` block:
//!
//! - `view`: move through a branch's history by direction or hash prefix
//! - `back`: return to the position before the last checkout

pub mod back;
pub mod view;
