//! ISBN-10 validation against the ISO 2108 weighted-sum checksum

use crate::models::isbn::ISBN_LENGTH;

/// Check a candidate ISBN-10.
///
/// Positions 1..9 must be decimal digits, position 10 a digit or `X`
/// (worth 10). The candidate is valid when Σ(value_i × i) is divisible
/// by 11. Never fails: malformed input is simply invalid.
pub fn validate(candidate: &str) -> bool {
    if candidate.chars().count() != ISBN_LENGTH {
        return false;
    }

    let mut sum = 0;
    for (position, c) in (1..).zip(candidate.chars()) {
        let value = match c {
            'X' if position == ISBN_LENGTH as u32 => 10,
            _ => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += value * position;
    }

    sum % 11 == 0
}
