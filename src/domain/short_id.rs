//! Short, file-name-safe note identifiers

use chrono::Utc;
use rand::Rng;

const HASH_MULTIPLIER: u64 = 131;
const HASH_MODULUS: u64 = 2_147_483_647;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Derive a short id for a note.
///
/// A stable identifier always hashes to the same token, so re-exports keep
/// their file names. Without one the token is `{unix-seconds}-{nnnn}` and
/// differs between calls.
pub fn short_id(stable_id: Option<&str>) -> String {
    match stable_id {
        Some(id) => to_base36(rolling_hash(id)),
        None => fallback_id(),
    }
}

/// Polynomial rolling hash over the characters of `input`, reduced mod 2^31 - 1
pub fn rolling_hash(input: &str) -> u64 {
    input.chars().fold(0u64, |acc, c| {
        (acc * HASH_MULTIPLIER + u64::from(u32::from(c))) % HASH_MODULUS
    })
}

/// Render a value in lowercase base 36, most significant digit first
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

fn fallback_id() -> String {
    let seconds = Utc::now().timestamp();
    let suffix: u32 = rand::rng().random_range(1000..=9999);
    format!("{}-{}", seconds, suffix)
}
