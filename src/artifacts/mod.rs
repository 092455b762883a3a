//! Domain types and navigation logic
//!
//! This module contains the types the commands operate on:
//!
//! - `commit_id`: validated commit identifiers
//! - `errors`: the navigation error taxonomy
//! - `history`: ordered commit sequences and target resolution
//! - `reflog`: checkout-entry parsing for the `back` command

pub mod commit_id;
pub mod errors;
pub mod history;
pub mod reflog;
