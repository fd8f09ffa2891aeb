#![cfg(feature = "ean13")]

use nordid::ean13;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn valid_retail_codes() {
    assert!(ean13::validate("5901234123457"));
    assert!(ean13::validate("4006381333931"));
    assert!(ean13::validate("9788175257665"));
}

#[test]
fn wrong_check_digit_rejected() {
    for wrong in ["5901234123450", "5901234123456", "5901234123458"] {
        assert!(!ean13::validate(wrong), "{wrong} must not validate");
    }
}

#[test]
fn wrong_length_rejected() {
    assert!(!ean13::validate(""));
    assert!(!ean13::validate("5901234"));
    assert!(!ean13::validate("590123412345")); // 12 digits, no check digit
    assert!(!ean13::validate("59012341234570"));
}

#[test]
fn non_digit_input_rejected() {
    assert!(!ean13::validate("590123412345a"));
    assert!(!ean13::validate("59012-4123457"));
    assert!(!ean13::validate(" 901234123457"));
}

// ---------------------------------------------------------------------------
// Check digit computation
// ---------------------------------------------------------------------------

#[test]
fn check_digit_matches_known_codes() {
    assert_eq!(ean13::check_digit(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]), 7);
    assert_eq!(ean13::check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
}

#[test]
fn check_digit_ten_collapses_to_zero() {
    // sum of zero payload is zero, so the raw 10 - 0 collapses to 0
    assert_eq!(ean13::check_digit(&[0; 12]), 0);
    assert!(ean13::validate("0000000000000"));
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn generate_from_known_payload() {
    assert_eq!(
        ean13::generate_from([5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]),
        "5901234123457"
    );
    assert_eq!(
        ean13::generate_from([4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]),
        "4006381333931"
    );
}

#[test]
fn generated_codes_are_thirteen_digits_and_valid() {
    for _ in 0..250 {
        let code = ean13::generate();
        assert_eq!(code.len(), 13);
        assert!(code.bytes().all(|b| b.is_ascii_digit()));
        assert!(ean13::validate(&code));
    }
}

#[test]
fn validation_is_idempotent() {
    let code = ean13::generate();
    let first = ean13::validate(&code);
    let second = ean13::validate(&code);
    assert_eq!(first, second);
    assert!(first);
}
