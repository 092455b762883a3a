//! Git commit identifier (SHA-1 hash)
//!
//! Commit IDs are 40-character hexadecimal strings as printed by
//! `git log --pretty=%H` and `git rev-parse`. They are treated as opaque
//! tokens: the only operations are equality and prefix matching.

const COMMIT_ID_LENGTH: usize = 40;
const SHORT_ID_LENGTH: usize = 7;

/// Git commit identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated CommitId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid commit ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid commit ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Whether this ID starts with the given non-empty prefix
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.starts_with(prefix)
    }

    /// Get abbreviated form of the commit ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_id(&self) -> String {
        self.0.split_at(SHORT_ID_LENGTH).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_id() {
        let id = CommitId::try_parse("a".repeat(40)).unwrap();
        assert_eq!(id.as_ref(), "a".repeat(40));
    }

    #[test]
    fn test_parse_rejects_short_id() {
        let result = CommitId::try_parse("abc123".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex_characters() {
        let result = CommitId::try_parse("g".repeat(40));
        assert!(result.is_err());
    }

    #[test]
    fn test_matches_prefix() {
        let id = CommitId::try_parse(format!("abc123{}", "0".repeat(34))).unwrap();
        assert!(id.matches_prefix("abc"));
        assert!(id.matches_prefix(id.as_ref()));
        assert!(!id.matches_prefix("abd"));
    }

    #[test]
    fn test_empty_prefix_never_matches() {
        let id = CommitId::try_parse("a".repeat(40)).unwrap();
        assert!(!id.matches_prefix(""));
    }

    #[test]
    fn test_short_id_is_seven_characters() {
        let id = CommitId::try_parse(format!("abcdef0{}", "1".repeat(33))).unwrap();
        assert_eq!(id.to_short_id(), "abcdef0");
    }
}
