//! Reflog checkout-entry parsing
//!
//! `git reflog` prints reference movements newest first, one per line:
//!
//! ```text
//! f3a91be HEAD@{0}: checkout: moving from main to f3a91be
//! 2c817fd HEAD@{1}: commit: add parser
//! ```
//!
//! Only checkout lines matter here. They are matched against the known
//! grammar of the message rather than by whitespace-field position, so a
//! variable-length prefix cannot shift the extracted tokens.

use anyhow::Context;
use derive_new::new;

const CHECKOUT_LINE_REGEX: &str = r"checkout: moving from (\S+) to (\S+)";

/// One checkout movement recorded in the reflog
///
/// `from` and `to` are whatever tokens git recorded: a full commit ID or a
/// branch name. Both are valid checkout targets, so they are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CheckoutEntry {
    from: String,
    to: String,
}

impl CheckoutEntry {
    /// Parse a single reflog line, returning `None` for non-checkout lines
    pub fn try_parse(line: &str) -> anyhow::Result<Option<Self>> {
        let re = regex::Regex::new(CHECKOUT_LINE_REGEX)
            .with_context(|| format!("invalid checkout line regex: {CHECKOUT_LINE_REGEX}"))?;

        Ok(re
            .captures(line)
            .map(|caps| Self::new(caps[1].to_string(), caps[2].to_string())))
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

/// The most recent checkout recorded in the reflog, if any
pub fn last_checkout(reflog: &str) -> anyhow::Result<Option<CheckoutEntry>> {
    for line in reflog.lines() {
        if let Some(entry) = CheckoutEntry::try_parse(line)? {
            return Ok(Some(entry));
        }
    }

    Ok(None)
}
