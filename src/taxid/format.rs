//! Country dispatch and per-country tax ID rules.

use crate::checksum::validate_modulus11;

use super::personal::validate_personal_number;

/// Validate a tax ID (VAT number) for a two-letter ISO 3166-1 country code.
///
/// The input is sanitized first — every character that is not an ASCII
/// decimal digit is stripped, so `"DK-13585628"` and `"13 58 56 28"` both
/// validate. Supported countries are Denmark (`DK`), Norway (`NO`) and
/// Sweden (`SE`); any other country code returns `false`.
///
/// Expected bad input never errors: empty strings, wrong lengths and
/// failing checksums all come back as `false`.
pub fn check_tax_id(country_code: &str, tax_id: &str) -> bool {
    if tax_id.trim().is_empty() {
        return false;
    }

    let sanitized = sanitize_tax_id(tax_id);

    match country_code.to_ascii_uppercase().as_str() {
        "DK" => validate_denmark(&sanitized),
        "NO" => validate_norway(&sanitized),
        "SE" => validate_sweden(&sanitized),
        _ => false,
    }
}

/// Strip every character that is not an ASCII decimal digit.
pub fn sanitize_tax_id(tax_id: &str) -> String {
    tax_id.chars().filter(char::is_ascii_digit).collect()
}

/// Danish CVR: 8 digits, modulus-11 over the whole number.
fn validate_denmark(tax_id: &str) -> bool {
    tax_id.len() == 8 && tax_id.parse::<i64>().is_ok() && validate_modulus11(tax_id)
}

/// Norwegian organisasjonsnummer: 9 digits, modulus-11 over the whole
/// number. The full VAT format carries a trailing `MVA` marker, but only
/// the numeric part is validated here; sanitization drops the suffix.
fn validate_norway(tax_id: &str) -> bool {
    tax_id.len() == 9 && tax_id.parse::<i64>().is_ok() && validate_modulus11(tax_id)
}

/// Swedish organisationsnummer / momsregistreringsnummer.
///
/// Accepts the 10-digit organisationsnummer and the 12-digit EU VAT form
/// (organisationsnummer plus `01` suffix; the suffix is truncated, not
/// re-checked). A 6-digit input is the personnummer birth-date short form
/// used by personally held companies and gets the relaxed date check.
fn validate_sweden(tax_id: &str) -> bool {
    if tax_id.parse::<i64>().is_err() {
        return false;
    }

    let mut to_compare = tax_id;
    match tax_id.len() {
        6 => return validate_personal_number(tax_id),
        n if n < 10 => return false,
        // strip the EU extension, leaving the organisationsnummer
        12 => to_compare = &tax_id[..10],
        _ => {}
    }

    // C10 is the check digit over C1..C9; the number is valid iff
    // recomputing it reproduces the input exactly.
    let c10 = check_digit_10(tax_id);
    let mut expected = tax_id[..9].to_string();
    expected.push(c10);
    expected == to_compare
}

/// Swedish C10 check digit: a Luhn variant written out positionally.
///
/// `r` sums `d/5 + (d*2) mod 10` over the odd positions C1, C3, C5, C7, C9
/// (0-based indexes 0, 2, 4, 6, 8); `c1` sums the even positions C2..C8.
fn check_digit_10(tax_id: &str) -> char {
    let digit = |m: usize| u32::from(tax_id.as_bytes()[m] - b'0');

    let r: u32 = [0usize, 2, 4, 6, 8]
        .iter()
        .map(|&m| digit(m) / 5 + digit(m) * 2 % 10)
        .sum();
    let c1: u32 = [1usize, 3, 5, 7].iter().map(|&m| digit(m)).sum();

    let c10 = (10 - (r + c1) % 10) % 10;
    char::from_digit(c10, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_is_case_insensitive() {
        assert!(check_tax_id("dk", "13585628"));
        assert!(check_tax_id("Dk", "13585628"));
    }

    #[test]
    fn unsupported_country_rejected() {
        assert!(!check_tax_id("DE", "13585628"));
        assert!(!check_tax_id("", "13585628"));
    }

    #[test]
    fn blank_tax_id_rejected() {
        assert!(!check_tax_id("DK", ""));
        assert!(!check_tax_id("DK", "   "));
    }

    #[test]
    fn sanitize_strips_everything_but_digits() {
        assert_eq!(sanitize_tax_id("SE 5560 1257 9001"), "556012579001");
        assert_eq!(sanitize_tax_id("NO923609016MVA"), "923609016");
        assert_eq!(sanitize_tax_id("no digits"), "");
    }

    #[test]
    fn swedish_check_digit() {
        // Volvo AB: 556012-5790
        assert_eq!(check_digit_10("5560125790"), '0');
        // Skanska AB: 556000-4615
        assert_eq!(check_digit_10("5560004615"), '5');
    }

    #[test]
    fn swedish_eleven_digits_never_validates() {
        // 11 digits is neither the 10-digit nor the EU 12-digit form
        assert!(!check_tax_id("SE", "55601257900"));
    }
}
