//! # nordid
//!
//! Small utilities for Nordic business identifiers: checksum validation for
//! Danish CVR, Norwegian organisasjonsnummer and Swedish
//! organisationsnummer/momsnummer, an EAN-13 codec, a time-based GUID
//! generator, and random-string generation policies.
//!
//! All validators are pure functions: expected bad input is a `false`
//! return, never an error or a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use nordid::taxid::check_tax_id;
//! use nordid::{ean13, guid};
//!
//! // Country-dispatched tax ID validation; input is sanitized first.
//! assert!(check_tax_id("DK", "DK-13585628"));
//! assert!(check_tax_id("NO", "923 609 016 MVA"));
//! assert!(!check_tax_id("FI", "12345678")); // unsupported country
//!
//! // EAN-13 check digit round trip.
//! let code = ean13::generate();
//! assert!(ean13::validate(&code));
//!
//! // Time-based GUIDs carry their creation instant.
//! let id = guid::generate_time_based();
//! assert_eq!(guid::version(&id), Some(guid::GuidVersion::TimeBased));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Modulus-11 / modulus-10 checksum primitives |
//! | `taxid` | DK/NO/SE tax ID validation |
//! | `ean13` | EAN-13 validation and generation |
//! | `guid` | Time-based GUID generation and decoding |
//! | `strings` | Random string generation with policies |
//! | `all` | Everything (the default) |

#[cfg(feature = "core")]
pub mod checksum;

#[cfg(feature = "taxid")]
pub mod taxid;

#[cfg(feature = "ean13")]
pub mod ean13;

#[cfg(feature = "guid")]
pub mod guid;

#[cfg(feature = "strings")]
pub mod strings;

// Re-export the checksum primitives at crate root for convenience
#[cfg(feature = "core")]
pub use crate::checksum::*;
