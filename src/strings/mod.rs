//! Random string generation with composition policies.
//!
//! A [`StringOptions`] policy says how long the string must be, how many
//! distinct characters it needs, and which character classes are
//! mandatory. [`random_string`] satisfies the policy; [`password`] and
//! [`username`] are the common presets.
//!
//! # Example
//!
//! ```rust
//! use nordid::strings::{StringOptions, random_string};
//!
//! let options = StringOptions {
//!     required_length: 12,
//!     required_unique_chars: 6,
//!     require_digit: true,
//!     require_lowercase: true,
//!     require_uppercase: true,
//!     require_non_alphanumeric: false,
//! };
//! let s = random_string(&options);
//! assert!(s.len() >= 12);
//! assert!(s.chars().any(|c| c.is_ascii_digit()));
//! ```

mod generate;
mod options;

pub use generate::{password, random_string, random_text, username};
pub use options::StringOptions;
