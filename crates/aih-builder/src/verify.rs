//! Verification of candidate AIH numbers.
//!
//! A candidate is accepted when it is exactly 13 ASCII digits, its suffix and
//! check prefix agree on a variant (`0000`/`000` or `9999`/`999`), and its
//! last digit equals the check digit recomputed from the body.

use aih_types::check_digit;
use aih_types::{AihNumber, CheckDigitRule, KindDigit, RegionCode, Variant, YearRef, AIH_LENGTH, BODY_LENGTH};

use crate::types::{AihError, AihResult};

/// Parses and verifies a candidate AIH number.
///
/// # Errors
/// Returns the first structural problem found: length, non-digit character,
/// framing, then check digit.
///
/// # Examples
///
/// ```
/// use aih_builder::verify;
/// use aih_types::{CheckDigitRule, Variant};
///
/// let number = verify::parse("2624199999996", CheckDigitRule::Body).unwrap();
/// assert_eq!(number.variant(), Variant::Final);
/// assert_eq!(number.region_code().value(), 26);
///
/// assert!(verify::parse("2624199999995", CheckDigitRule::Body).is_err());
/// ```
pub fn parse(candidate: &str, rule: CheckDigitRule) -> AihResult<AihNumber> {
    let found = candidate.chars().count();
    if found != AIH_LENGTH {
        return Err(AihError::InvalidLength {
            expected: AIH_LENGTH,
            found,
        });
    }

    if let Some((position, found)) = candidate.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(AihError::NonDigit { position, found });
    }

    // All 13 characters are ASCII digits from here on, so byte slicing is safe.
    let variant = framing(candidate).ok_or_else(|| AihError::UnknownFraming {
        value: candidate.to_string(),
    })?;

    let expected = expected_check_digit_with_rule(&candidate[..BODY_LENGTH], rule)?;
    let found = candidate.as_bytes()[AIH_LENGTH - 1] - b'0';
    if expected != found {
        return Err(AihError::CheckDigitMismatch { expected, found });
    }

    let number = AihNumber::with_rule(
        RegionCode::new(field(&candidate[0..2])?)?,
        YearRef::new(field(&candidate[2..4])?)?,
        KindDigit::new(field(&candidate[4..5])?)?,
        variant,
        rule,
    );
    Ok(number)
}

/// Returns true if the candidate is a valid AIH number under the default rule.
///
/// # Examples
///
/// ```
/// use aih_builder::verify;
///
/// assert!(verify::is_valid("2624100000006"));
/// assert!(!verify::is_valid("2624100000001"));
/// assert!(!verify::is_valid("262410000000"));
/// ```
pub fn is_valid(candidate: &str) -> bool {
    parse(candidate, CheckDigitRule::default()).is_ok()
}

/// Computes the check digit of a body under the default rule.
///
/// The body is the part of an AIH number before the check field, normally
/// the first nine digits.
pub fn expected_check_digit(body: &str) -> AihResult<u8> {
    expected_check_digit_with_rule(body, CheckDigitRule::default())
}

/// Computes the check digit of a body under the given rule.
pub fn expected_check_digit_with_rule(body: &str, rule: CheckDigitRule) -> AihResult<u8> {
    check_digit::compute(body, rule).ok_or_else(|| AihError::Parse(format!("not a digit string: '{}'", body)))
}

/// Identifies the variant from the suffix and check prefix of a 13-digit value.
fn framing(candidate: &str) -> Option<Variant> {
    let variant = Variant::from_suffix(&candidate[5..BODY_LENGTH])?;
    if &candidate[BODY_LENGTH..AIH_LENGTH - 1] == variant.check_prefix() {
        Some(variant)
    } else {
        None
    }
}

fn field(digits: &str) -> AihResult<i64> {
    digits
        .parse::<i64>()
        .map_err(|_| AihError::Parse(format!("invalid numeric field: '{}'", digits)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;

    #[test]
    fn test_parse_built_numbers() {
        for (region, year, kind) in [(26, 24, 1), (26, 24, 5), (0, 0, 0), (99, 99, 9), (35, 25, 3)] {
            for is_initial in [true, false] {
                let value = build(region, year, kind, is_initial).unwrap();
                let number = parse(&value, CheckDigitRule::Body).unwrap();
                assert_eq!(number.as_str(), value);
                assert_eq!(i64::from(number.region_code().value()), region);
                assert_eq!(i64::from(number.year_ref().value()), year);
                assert_eq!(i64::from(number.kind_digit().value()), kind);
                assert_eq!(number.variant().is_initial(), is_initial);
            }
        }
    }

    #[test]
    fn test_invalid_length() {
        let err = parse("262410000000", CheckDigitRule::Body).unwrap_err();
        assert!(matches!(err, AihError::InvalidLength { expected: 13, found: 12 }));
        assert!(parse("", CheckDigitRule::Body).is_err());
        assert!(parse("26241000000066", CheckDigitRule::Body).is_err());
    }

    #[test]
    fn test_non_digit() {
        let err = parse("26241O0000006", CheckDigitRule::Body).unwrap_err();
        assert!(matches!(err, AihError::NonDigit { position: 5, found: 'O' }));

        // Multi-byte characters are counted as single positions.
        let err = parse("262410000000é", CheckDigitRule::Body).unwrap_err();
        assert!(matches!(err, AihError::NonDigit { position: 12, found: 'é' }));
    }

    #[test]
    fn test_unknown_framing() {
        // Suffix and check prefix disagree.
        let err = parse("2624100009996", CheckDigitRule::Body).unwrap_err();
        assert!(matches!(err, AihError::UnknownFraming { .. }));
        // Neither 0000 nor 9999.
        assert!(matches!(
            parse("2624112340006", CheckDigitRule::Body).unwrap_err(),
            AihError::UnknownFraming { .. }
        ));
    }

    #[test]
    fn test_check_digit_mismatch() {
        let err = parse("2624100000001", CheckDigitRule::Body).unwrap_err();
        assert!(matches!(err, AihError::CheckDigitMismatch { expected: 6, found: 1 }));
    }

    #[test]
    fn test_truncated_rule_accepts_legacy_numbers() {
        assert!(parse("2624100000005", CheckDigitRule::TruncatedBody).is_ok());
        assert!(parse("2624100000005", CheckDigitRule::Body).is_err());
        assert!(!is_valid("2624100000005"));
    }

    #[test]
    fn test_expected_check_digit() {
        assert_eq!(expected_check_digit("262410000").unwrap(), 6);
        assert_eq!(expected_check_digit("262450000").unwrap(), 0);
        assert_eq!(
            expected_check_digit_with_rule("262419999", CheckDigitRule::TruncatedBody).unwrap(),
            3
        );
        assert!(expected_check_digit("26x").is_err());
    }
}
