//! Weighted-digit checksum primitives.
//!
//! Modulus-11 and modulus-10 (Luhn) validation plus the matching
//! check-digit generators. These are the building blocks behind the
//! country-specific validators in [`crate::taxid`].

mod modulus;

pub use modulus::*;
