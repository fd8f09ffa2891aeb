//! EAN-13 check digit arithmetic.

use rand::Rng;

/// Number of payload digits in front of the check digit.
pub const FIRST_DIGITS: usize = 12;

/// Compute the EAN-13 check digit for twelve digit values.
///
/// Digit values above 9 are the caller's responsibility; the result is
/// only meaningful for decimal digits.
pub fn check_digit(first_digits: &[u8; FIRST_DIGITS]) -> u8 {
    let mut sum = 0u32;
    for (idx, &digit) in first_digits.iter().enumerate() {
        let weight = if idx % 2 == 0 { 1 } else { 3 };
        sum += u32::from(digit) * weight;
    }
    // a raw result of 10 collapses to 0
    ((10 - sum % 10) % 10) as u8
}

/// Validate a 13-character EAN-13 code.
///
/// Valid iff the input is exactly 13 ASCII digits and the check digit
/// recomputed from the first twelve matches the last one.
pub fn validate(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() != FIRST_DIGITS + 1 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut first = [0u8; FIRST_DIGITS];
    for (idx, b) in bytes[..FIRST_DIGITS].iter().enumerate() {
        first[idx] = b - b'0';
    }

    check_digit(&first) == bytes[FIRST_DIGITS] - b'0'
}

/// Generate a random valid EAN-13 code.
///
/// The twelve payload digits are drawn uniformly from the thread-local
/// generator; this is a test-data convenience, not a security feature.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let mut first = [0u8; FIRST_DIGITS];
    for digit in &mut first {
        *digit = rng.gen_range(0..10);
    }
    generate_from(first)
}

/// Build the 13-character code from caller-supplied payload digits.
pub fn generate_from(first_digits: [u8; FIRST_DIGITS]) -> String {
    let mut code = String::with_capacity(FIRST_DIGITS + 1);
    for digit in first_digits {
        code.push(char::from(b'0' + digit));
    }
    code.push(char::from(b'0' + check_digit(&first_digits)));
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        // 5*1+9*3+0+1*3+2+3*3+4+1*3+2+3*3+4+5*3 = 83 -> (10 - 3) % 10 = 7
        assert_eq!(check_digit(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]), 7);
        assert_eq!(check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        // sum 0 collapses to check digit 0
        assert_eq!(check_digit(&[0; 12]), 0);
    }

    #[test]
    fn validates_known_codes() {
        assert!(validate("5901234123457"));
        assert!(validate("4006381333931"));
        assert!(validate("0000000000000"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!validate("5901234123456"));
        assert!(!validate("4006381333930"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate(""));
        assert!(!validate("590123412345"));
        assert!(!validate("59012341234577"));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!validate("59O1234123457"));
        assert!(!validate("590123412345x"));
        // multi-byte input must not slip past the length check
        assert!(!validate("59012341234é"));
    }

    #[test]
    fn generate_from_appends_check_digit() {
        assert_eq!(
            generate_from([5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]),
            "5901234123457"
        );
    }

    #[test]
    fn generated_codes_validate() {
        for _ in 0..100 {
            let code = generate();
            assert_eq!(code.len(), 13);
            assert!(validate(&code));
        }
    }
}
