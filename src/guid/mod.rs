//! Time-based GUID generation and decoding.
//!
//! Identifiers follow a UUID-v1-like layout over the 16-byte array:
//! bytes 0–7 hold a little-endian `i64` count of 100 ns ticks since the
//! Gregorian reform (1582-10-15T00:00:00Z) with the version nibble
//! multiplexed into the top of byte 7, bytes 8–9 hold the clock sequence
//! with the variant bits `10` in the top of byte 8, and bytes 10–15 hold
//! the node identifier.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use nordid::guid;
//!
//! let at = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let id = guid::generate_time_based_with(at, &[0x12, 0x34], &[1, 2, 3, 4, 5, 6]).unwrap();
//!
//! assert_eq!(guid::version(&id), Some(guid::GuidVersion::TimeBased));
//! assert_eq!(guid::timestamp(&id), at);
//! ```

mod generator;
mod version;

pub use generator::{
    GuidError, default_clock_sequence, default_node, generate_time_based, generate_time_based_at,
    generate_time_based_for_node, generate_time_based_with, node_from_name, timestamp, version,
};
pub use version::GuidVersion;
