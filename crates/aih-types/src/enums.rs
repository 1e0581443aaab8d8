//! AIH enumeration types.
//!
//! This module provides enum representations for the coded parts of an AIH
//! number: the Initial/Final variant that frames the check digit, the kind of
//! authorization carried by the fifth digit, and the check digit rule.

/// Initial or Final framing of an AIH number.
///
/// The variant selects a fixed 4-character suffix after the kind digit and a
/// fixed 3-character prefix in front of the check digit.
///
/// # Examples
///
/// ```
/// use aih_types::Variant;
///
/// assert_eq!(Variant::Initial.suffix(), "0000");
/// assert_eq!(Variant::Final.check_prefix(), "999");
/// assert_eq!(Variant::from_is_initial(false), Variant::Final);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// First number of a block (`0000` / `000`).
    Initial,
    /// Last number of a block (`9999` / `999`).
    Final,
}

impl Variant {
    /// Suffix appended after the kind digit for the initial number.
    pub const INITIAL_SUFFIX: &'static str = "0000";
    /// Suffix appended after the kind digit for the final number.
    pub const FINAL_SUFFIX: &'static str = "9999";
    /// Prefix of the check field for the initial number.
    pub const INITIAL_CHECK_PREFIX: &'static str = "000";
    /// Prefix of the check field for the final number.
    pub const FINAL_CHECK_PREFIX: &'static str = "999";

    /// Both variants, initial first.
    pub const ALL: [Variant; 2] = [Variant::Initial, Variant::Final];

    /// Selects the variant from an `is_initial` flag.
    pub fn from_is_initial(is_initial: bool) -> Self {
        if is_initial {
            Self::Initial
        } else {
            Self::Final
        }
    }

    /// Returns true for [`Variant::Initial`].
    pub fn is_initial(self) -> bool {
        matches!(self, Self::Initial)
    }

    /// Returns the 4-character suffix that follows the kind digit.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Initial => Self::INITIAL_SUFFIX,
            Self::Final => Self::FINAL_SUFFIX,
        }
    }

    /// Returns the 3-character prefix placed before the check digit.
    pub fn check_prefix(self) -> &'static str {
        match self {
            Self::Initial => Self::INITIAL_CHECK_PREFIX,
            Self::Final => Self::FINAL_CHECK_PREFIX,
        }
    }

    /// Identifies the variant from a 4-character suffix.
    ///
    /// Returns `None` if the suffix is neither `0000` nor `9999`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            Self::INITIAL_SUFFIX => Some(Self::Initial),
            Self::FINAL_SUFFIX => Some(Self::Final),
            _ => None,
        }
    }

    /// Parses a variant name.
    ///
    /// Accepts `initial`/`final`, `i`/`f`, `inicial` and `true`/`false`
    /// (as an `is_initial` flag), ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "initial" | "inicial" | "i" | "true" => Some(Self::Initial),
            "final" | "f" | "false" => Some(Self::Final),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Final => f.write_str("final"),
        }
    }
}

/// Kind of authorization encoded by the fifth digit.
///
/// Any digit is structurally valid in an AIH number; these are the values
/// in documented use.
///
/// # Examples
///
/// ```
/// use aih_types::AihKind;
///
/// assert_eq!(AihKind::from_digit(5), Some(AihKind::Elective));
/// assert_eq!(AihKind::General.to_digit(), 1);
/// assert_eq!(AihKind::from_digit(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AihKind {
    /// General-purpose admission.
    General,
    /// Admission regulated by the national high-complexity referral centre (CNRAC).
    Cnrac,
    /// Elective surgical procedure.
    Elective,
}

impl AihKind {
    /// Digit for general-purpose admissions.
    pub const GENERAL_DIGIT: u8 = 1;
    /// Digit for CNRAC admissions.
    pub const CNRAC_DIGIT: u8 = 3;
    /// Digit for elective surgery.
    pub const ELECTIVE_DIGIT: u8 = 5;

    /// Creates an AihKind from its digit.
    ///
    /// Returns `None` if the digit doesn't match a known kind.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            Self::GENERAL_DIGIT => Some(Self::General),
            Self::CNRAC_DIGIT => Some(Self::Cnrac),
            Self::ELECTIVE_DIGIT => Some(Self::Elective),
            _ => None,
        }
    }

    /// Returns the digit for this kind.
    pub fn to_digit(self) -> u8 {
        match self {
            Self::General => Self::GENERAL_DIGIT,
            Self::Cnrac => Self::CNRAC_DIGIT,
            Self::Elective => Self::ELECTIVE_DIGIT,
        }
    }
}

/// Rule used to derive the check digit from an AIH body.
///
/// The body is the 9-digit string ending in `0000` or `9999`, before the
/// check field is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CheckDigitRule {
    /// Remainder of the whole body modulo 11, with 10 mapped to 0.
    #[default]
    Body,
    /// Drops the last character of the body before taking the remainder.
    ///
    /// Reproduces numbers issued by older generators that read "remove the
    /// last digit" literally.
    TruncatedBody,
}

impl CheckDigitRule {
    /// Parses a rule name (`body`, `truncated_body`, `truncated`, `legacy`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "body" => Some(Self::Body),
            "truncated_body" | "truncated-body" | "truncated" | "legacy" => {
                Some(Self::TruncatedBody)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_literals() {
        assert_eq!(Variant::Initial.suffix(), "0000");
        assert_eq!(Variant::Initial.check_prefix(), "000");
        assert_eq!(Variant::Final.suffix(), "9999");
        assert_eq!(Variant::Final.check_prefix(), "999");
    }

    #[test]
    fn test_variant_from_suffix() {
        assert_eq!(Variant::from_suffix("0000"), Some(Variant::Initial));
        assert_eq!(Variant::from_suffix("9999"), Some(Variant::Final));
        assert_eq!(Variant::from_suffix("0009"), None);
        assert_eq!(Variant::from_suffix(""), None);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!(Variant::parse("Initial"), Some(Variant::Initial));
        assert_eq!(Variant::parse(" F "), Some(Variant::Final));
        assert_eq!(Variant::parse("true"), Some(Variant::Initial));
        assert_eq!(Variant::parse("false"), Some(Variant::Final));
        assert_eq!(Variant::parse("middle"), None);
    }

    #[test]
    fn test_variant_is_initial() {
        assert!(Variant::from_is_initial(true).is_initial());
        assert!(!Variant::from_is_initial(false).is_initial());
        assert_eq!(Variant::Final.to_string(), "final");
    }

    #[test]
    fn test_kind_conversion() {
        assert_eq!(AihKind::from_digit(1), Some(AihKind::General));
        assert_eq!(AihKind::from_digit(3), Some(AihKind::Cnrac));
        assert_eq!(AihKind::from_digit(5), Some(AihKind::Elective));
        assert_eq!(AihKind::from_digit(0), None);
        assert_eq!(AihKind::from_digit(9), None);
        assert_eq!(AihKind::Cnrac.to_digit(), 3);
    }

    #[test]
    fn test_check_digit_rule_parse() {
        assert_eq!(CheckDigitRule::default(), CheckDigitRule::Body);
        assert_eq!(CheckDigitRule::parse("BODY"), Some(CheckDigitRule::Body));
        assert_eq!(
            CheckDigitRule::parse("legacy"),
            Some(CheckDigitRule::TruncatedBody)
        );
        assert_eq!(CheckDigitRule::parse("luhn"), None);
    }
}
