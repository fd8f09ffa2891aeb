//! EAN-13 barcode validation and generation.
//!
//! The 13th digit of an EAN-13 code is a checksum over the first twelve:
//! digits at even (0-based) positions weigh 1, digits at odd positions
//! weigh 3, and the check digit is `(10 - sum mod 10) mod 10`.
//!
//! # Example
//!
//! ```rust
//! use nordid::ean13;
//!
//! assert!(ean13::validate("5901234123457"));
//! assert!(!ean13::validate("5901234123456"));
//!
//! let code = ean13::generate();
//! assert_eq!(code.len(), 13);
//! assert!(ean13::validate(&code));
//! ```

mod codec;

pub use codec::{FIRST_DIGITS, check_digit, generate, generate_from, validate};
