//! Modulo-11 check digit.
//!
//! The check digit of an AIH number is the remainder of its body, read as a
//! base-10 integer, divided by 11. A remainder of 10 maps to 0.
//!
//! # Examples
//!
//! ```
//! use aih_types::check_digit;
//! use aih_types::CheckDigitRule;
//!
//! assert_eq!(check_digit::mod11("262410000"), Some(6));
//! assert_eq!(check_digit::compute("262410000", CheckDigitRule::Body), Some(6));
//! assert_eq!(check_digit::compute("262459999", CheckDigitRule::Body), Some(0));
//! ```

use crate::CheckDigitRule;

/// The modulus of the check digit.
pub const MODULUS: u32 = 11;

/// Returns the remainder of a decimal digit string modulo 11.
///
/// The remainder is accumulated digit by digit, so strings of any length are
/// accepted. Returns `None` if the string is empty or contains anything other
/// than ASCII digits.
pub fn mod11(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }

    digits.bytes().try_fold(0u32, |acc, byte| {
        let digit = (byte as char).to_digit(10)?;
        Some((acc * 10 + digit) % MODULUS)
    })
}

/// Maps a modulo-11 remainder to a single check digit.
pub fn digit_from_remainder(remainder: u32) -> u8 {
    if remainder < 10 {
        remainder as u8
    } else {
        0
    }
}

/// Computes the check digit of an AIH body under the given rule.
///
/// Returns `None` if the digits the rule reads are empty or not all ASCII
/// digits.
pub fn compute(body: &str, rule: CheckDigitRule) -> Option<u8> {
    let digits = match rule {
        CheckDigitRule::Body => body,
        CheckDigitRule::TruncatedBody => {
            let mut chars = body.chars();
            chars.next_back()?;
            chars.as_str()
        }
    };

    mod11(digits).map(digit_from_remainder)
}
