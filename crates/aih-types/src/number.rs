//! AIH number type.
//!
//! This module provides the `AihNumber` struct, the 13-digit hospital
//! admission authorization number with its embedded check digit.

use std::fmt;

use crate::check_digit;
use crate::{CheckDigitRule, KindDigit, RegionCode, Variant, YearRef};

/// Length of a well-formed AIH number.
pub const AIH_LENGTH: usize = 13;

/// Length of the body the check digit is computed over.
pub const BODY_LENGTH: usize = 9;

/// A complete AIH number.
///
/// Layout (13 ASCII digits):
///
/// | chars  | content                                   |
/// |--------|-------------------------------------------|
/// | 0..2   | region code (IBGE federative unit)        |
/// | 2..4   | year reference                            |
/// | 4      | kind digit                                |
/// | 5..9   | `0000` (initial) or `9999` (final)        |
/// | 9..12  | `000` (initial) or `999` (final)          |
/// | 12     | check digit                               |
///
/// # Examples
///
/// ```
/// use aih_types::{AihNumber, KindDigit, RegionCode, Variant, YearRef};
///
/// let number = AihNumber::new(
///     RegionCode::new(26).unwrap(),
///     YearRef::new(24).unwrap(),
///     KindDigit::new(1).unwrap(),
///     Variant::Initial,
/// );
///
/// assert_eq!(number.as_str(), "2624100000006");
/// assert_eq!(number.body(), "262410000");
/// assert_eq!(number.check_digit(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AihNumber {
    region_code: RegionCode,
    year_ref: YearRef,
    kind_digit: KindDigit,
    variant: Variant,
    check_digit: u8,
    value: String,
}

impl AihNumber {
    /// Builds an AIH number using the default check digit rule.
    pub fn new(
        region_code: RegionCode,
        year_ref: YearRef,
        kind_digit: KindDigit,
        variant: Variant,
    ) -> Self {
        Self::with_rule(region_code, year_ref, kind_digit, variant, CheckDigitRule::Body)
    }

    /// Builds an AIH number using the given check digit rule.
    pub fn with_rule(
        region_code: RegionCode,
        year_ref: YearRef,
        kind_digit: KindDigit,
        variant: Variant,
        rule: CheckDigitRule,
    ) -> Self {
        let mut value = String::with_capacity(AIH_LENGTH);
        value.push_str(&region_code.to_string());
        value.push_str(&year_ref.to_string());
        value.push_str(&kind_digit.to_string());
        value.push_str(variant.suffix());

        // The body is always nine ASCII digits here.
        let check_digit = check_digit::compute(&value, rule).unwrap_or(0);

        value.push_str(variant.check_prefix());
        value.push(char::from(b'0' + check_digit));

        Self {
            region_code,
            year_ref,
            kind_digit,
            variant,
            check_digit,
            value,
        }
    }

    /// Builds the initial and final numbers for one region, year and kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use aih_types::{AihKind, AihNumber, RegionCode, YearRef};
    ///
    /// let (initial, last) = AihNumber::pair(
    ///     RegionCode::new(26).unwrap(),
    ///     YearRef::new(24).unwrap(),
    ///     AihKind::Elective.into(),
    /// );
    /// assert_eq!(initial.as_str(), "2624500000000");
    /// assert_eq!(last.as_str(), "2624599999990");
    /// ```
    pub fn pair(region_code: RegionCode, year_ref: YearRef, kind_digit: KindDigit) -> (Self, Self) {
        (
            Self::new(region_code, year_ref, kind_digit, Variant::Initial),
            Self::new(region_code, year_ref, kind_digit, Variant::Final),
        )
    }

    /// Returns the region code.
    pub fn region_code(&self) -> RegionCode {
        self.region_code
    }

    /// Returns the year reference.
    pub fn year_ref(&self) -> YearRef {
        self.year_ref
    }

    /// Returns the kind digit.
    pub fn kind_digit(&self) -> KindDigit {
        self.kind_digit
    }

    /// Returns the Initial/Final variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the check digit (0-9).
    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Returns the full 13-digit value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the 9-digit body the check digit was computed over.
    pub fn body(&self) -> &str {
        &self.value[..BODY_LENGTH]
    }

    /// Consumes the number and returns its string value.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for AihNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for AihNumber {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<AihNumber> for String {
    fn from(number: AihNumber) -> Self {
        number.value
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AihNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(region: i64, year: i64, kind: i64, variant: Variant) -> AihNumber {
        AihNumber::new(
            RegionCode::new(region).unwrap(),
            YearRef::new(year).unwrap(),
            KindDigit::new(kind).unwrap(),
            variant,
        )
    }

    #[test]
    fn test_general_pair() {
        assert_eq!(number(26, 24, 1, Variant::Initial).as_str(), "2624100000006");
        assert_eq!(number(26, 24, 1, Variant::Final).as_str(), "2624199999996");
    }

    #[test]
    fn test_elective_pair_remainder_ten() {
        // Both bodies leave remainder 10, which maps to 0.
        assert_eq!(number(26, 24, 5, Variant::Initial).as_str(), "2624500000000");
        assert_eq!(number(26, 24, 5, Variant::Final).as_str(), "2624599999990");
    }

    #[test]
    fn test_all_zero_inputs() {
        let initial = number(0, 0, 0, Variant::Initial);
        assert_eq!(initial.as_str(), "0000000000000");
        assert_eq!(initial.check_digit(), 0);

        let last = number(0, 0, 0, Variant::Final);
        assert_eq!(last.as_str(), "0000099999990");
    }

    #[test]
    fn test_accessors() {
        let aih = number(35, 25, 3, Variant::Final);
        assert_eq!(aih.region_code().value(), 35);
        assert_eq!(aih.year_ref().value(), 25);
        assert_eq!(aih.kind_digit().value(), 3);
        assert_eq!(aih.variant(), Variant::Final);
        assert_eq!(aih.body(), "352539999");
        assert_eq!(aih.check_digit(), 9);
        assert_eq!(aih.to_string(), "3525399999999");
    }

    #[test]
    fn test_truncated_rule() {
        let aih = AihNumber::with_rule(
            RegionCode::new(26).unwrap(),
            YearRef::new(24).unwrap(),
            KindDigit::new(1).unwrap(),
            Variant::Initial,
            CheckDigitRule::TruncatedBody,
        );
        assert_eq!(aih.as_str(), "2624100000005");
    }

    #[test]
    fn test_every_valid_input_is_thirteen_digits() {
        for region in (0..=99).step_by(7) {
            for year in (0..=99).step_by(11) {
                for kind in 0..=9 {
                    for variant in Variant::ALL {
                        let aih = number(region, year, kind, variant);
                        assert_eq!(aih.as_str().len(), AIH_LENGTH);
                        assert!(aih.as_str().bytes().all(|b| b.is_ascii_digit()));
                        let expected = check_digit::compute(aih.body(), CheckDigitRule::Body);
                        assert_eq!(Some(aih.check_digit()), expected);
                        assert_eq!(aih.as_str().as_bytes()[12], b'0' + aih.check_digit());
                    }
                }
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_string() {
        let aih = number(26, 24, 1, Variant::Initial);
        assert_eq!(serde_json::to_string(&aih).unwrap(), "\"2624100000006\"");
    }
}
