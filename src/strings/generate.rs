//! Policy-driven random string generators.

use rand::Rng;
use rand::rngs::ThreadRng;

use super::options::StringOptions;

// ambiguous glyphs (I, l) are left out of the letter classes
const UPPERCASE: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@$?_-";

const CONSONANTS: &[u8] = b"bcdfghjklmnprstvxzBDFGHJKLMNPRSTVXZ";
const VOWELS: &[u8] = b"aeiouyAEIOUY";

/// Generate a random string satisfying the given policy.
///
/// One character from each required class is guaranteed; the remainder is
/// drawn from the union of the enabled classes (all letters and digits
/// when no class is required). Generation continues past
/// `required_length` if the distinct-character floor is not yet met.
pub fn random_string(options: &StringOptions) -> String {
    let mut rng = rand::thread_rng();
    let mut chars: Vec<u8> = Vec::with_capacity(options.required_length);

    if options.require_uppercase {
        insert_at_random(&mut rng, &mut chars, UPPERCASE);
    }
    if options.require_lowercase {
        insert_at_random(&mut rng, &mut chars, LOWERCASE);
    }
    if options.require_digit {
        insert_at_random(&mut rng, &mut chars, DIGITS);
    }
    if options.require_non_alphanumeric {
        insert_at_random(&mut rng, &mut chars, SYMBOLS);
    }

    let pool = char_pool(options);
    // the pool bounds how many distinct characters are reachable
    let unique_floor = options.required_unique_chars.min(pool.len());

    while chars.len() < options.required_length || distinct_count(&chars) < unique_floor {
        insert_at_random(&mut rng, &mut chars, &pool);
    }

    String::from_utf8(chars).unwrap_or_default()
}

/// Generate a 16-character password: digits, mixed case, at least 8
/// distinct characters.
pub fn password() -> String {
    random_string(&StringOptions {
        required_unique_chars: 8,
        ..StringOptions::default()
    })
}

/// Generate a 16-character username: digits, mixed case, at least 4
/// distinct characters.
pub fn username() -> String {
    random_string(&StringOptions::default())
}

/// Generate pronounceable filler text by alternating consonants and
/// vowels.
pub fn random_text(length: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(length + 1);
    while out.len() < length {
        out.push(char::from(CONSONANTS[rng.gen_range(0..CONSONANTS.len())]));
        if out.len() < length {
            out.push(char::from(VOWELS[rng.gen_range(0..VOWELS.len())]));
        }
    }
    out
}

fn insert_at_random(rng: &mut ThreadRng, chars: &mut Vec<u8>, class: &[u8]) {
    let ch = class[rng.gen_range(0..class.len())];
    let at = rng.gen_range(0..=chars.len());
    chars.insert(at, ch);
}

fn char_pool(options: &StringOptions) -> Vec<u8> {
    let mut pool = Vec::new();
    if options.require_uppercase {
        pool.extend_from_slice(UPPERCASE);
    }
    if options.require_lowercase {
        pool.extend_from_slice(LOWERCASE);
    }
    if options.require_digit {
        pool.extend_from_slice(DIGITS);
    }
    if options.require_non_alphanumeric {
        pool.extend_from_slice(SYMBOLS);
    }
    if pool.is_empty() {
        pool.extend_from_slice(UPPERCASE);
        pool.extend_from_slice(LOWERCASE);
        pool.extend_from_slice(DIGITS);
    }
    pool
}

fn distinct_count(chars: &[u8]) -> usize {
    let mut seen = [false; 128];
    let mut count = 0;
    for &b in chars {
        let idx = usize::from(b) & 0x7f;
        if !seen[idx] {
            seen[idx] = true;
            count += 1;
        }
    }
    count
}
