use serde::{Deserialize, Serialize};

/// Policy for random string generation.
///
/// The generator keeps drawing characters until both `required_length`
/// and `required_unique_chars` are satisfied, so the result can be longer
/// than `required_length` when the uniqueness floor demands it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringOptions {
    /// Minimum total length of the generated string.
    pub required_length: usize,
    /// Minimum number of distinct characters.
    pub required_unique_chars: usize,
    /// Require at least one decimal digit.
    pub require_digit: bool,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one non-alphanumeric character.
    pub require_non_alphanumeric: bool,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            required_length: 16,
            required_unique_chars: 4,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_non_alphanumeric: false,
        }
    }
}
