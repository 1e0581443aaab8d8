//! AIH number construction.
//!
//! Builds the 13-digit identifier from its four inputs:
//!
//! 1. `body = pad2(region) + pad2(year) + kind + suffix` (`0000` or `9999`)
//! 2. `check = body mod 11`, with 10 mapped to 0
//! 3. `result = body + prefix + check` (`000` or `999`)

use aih_types::check_digit;
use aih_types::{AihKind, AihNumber, KindDigit, RegionCode, Variant, YearRef};

use crate::types::{AihError, AihResult, BuildConfig, Validation};

/// The initial and final AIH numbers of one region, year and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AihRange {
    /// Number ending in `0000` / `000`.
    pub initial: AihNumber,
    /// Number ending in `9999` / `999`.
    pub last: AihNumber,
}

/// Builds an AIH number with the default configuration.
///
/// Inputs outside the fixed-width layout (region or year outside 0..=99,
/// kind outside 0..=9) are rejected with [`AihError::InvalidInput`].
///
/// # Examples
///
/// ```
/// use aih_builder::build;
///
/// assert_eq!(build(26, 24, 1, true).unwrap(), "2624100000006");
/// assert_eq!(build(26, 24, 1, false).unwrap(), "2624199999996");
/// assert!(build(100, 24, 1, true).is_err());
/// ```
pub fn build(region_code: i64, year_ref: i64, kind_digit: i64, is_initial: bool) -> AihResult<String> {
    build_with_config(
        region_code,
        year_ref,
        kind_digit,
        Variant::from_is_initial(is_initial),
        &BuildConfig::default(),
    )
}

/// Builds an AIH number as a string, honouring the configured validation.
///
/// Under [`Validation::Lenient`] oversized values are inserted verbatim and
/// the result is longer than 13 characters; negative values are always
/// rejected since they cannot be written as digits.
///
/// # Examples
///
/// ```
/// use aih_builder::{build_with_config, BuildConfig};
/// use aih_types::Variant;
///
/// let lenient = BuildConfig::lenient();
/// let value = build_with_config(260, 24, 1, Variant::Initial, &lenient).unwrap();
/// assert_eq!(value.len(), 14);
/// ```
pub fn build_with_config(
    region_code: i64,
    year_ref: i64,
    kind_digit: i64,
    variant: Variant,
    config: &BuildConfig,
) -> AihResult<String> {
    match config.validation {
        Validation::Strict => {
            build_number(region_code, year_ref, kind_digit, variant, config).map(AihNumber::into_string)
        }
        Validation::Lenient => compose_lenient(region_code, year_ref, kind_digit, variant, config),
    }
}

/// Builds a typed AIH number.
///
/// Range checks are always applied since an [`AihNumber`] is always 13
/// digits; the check digit rule and kind restriction come from `config`.
pub fn build_number(
    region_code: i64,
    year_ref: i64,
    kind_digit: i64,
    variant: Variant,
    config: &BuildConfig,
) -> AihResult<AihNumber> {
    let region = RegionCode::new(region_code)?;
    let year = YearRef::new(year_ref)?;
    let kind = KindDigit::new(kind_digit)?;
    check_kind(kind_digit, config)?;

    let number = AihNumber::with_rule(region, year, kind, variant, config.check_digit_rule);
    tracing::debug!("Built {} AIH {} (check digit {})", variant, number, number.check_digit());
    Ok(number)
}

/// Builds the initial and final numbers for one region, year and kind.
///
/// # Examples
///
/// ```
/// use aih_builder::{build_range, BuildConfig};
///
/// let range = build_range(26, 24, 5, &BuildConfig::default()).unwrap();
/// assert_eq!(range.initial.as_str(), "2624500000000");
/// assert_eq!(range.last.as_str(), "2624599999990");
/// ```
pub fn build_range(
    region_code: i64,
    year_ref: i64,
    kind_digit: i64,
    config: &BuildConfig,
) -> AihResult<AihRange> {
    Ok(AihRange {
        initial: build_number(region_code, year_ref, kind_digit, Variant::Initial, config)?,
        last: build_number(region_code, year_ref, kind_digit, Variant::Final, config)?,
    })
}

fn check_kind(kind_digit: i64, config: &BuildConfig) -> AihResult<()> {
    if !config.restrict_kinds {
        return Ok(());
    }

    let known = u8::try_from(kind_digit).ok().and_then(AihKind::from_digit);
    match known {
        Some(_) => Ok(()),
        None => Err(AihError::UnsupportedKind { digit: kind_digit }),
    }
}

fn non_negative(field: &'static str, value: i64) -> AihResult<i64> {
    if value < 0 {
        return Err(AihError::InvalidInput {
            field,
            value,
            reason: "must not be negative".to_string(),
        });
    }
    Ok(value)
}

fn compose_lenient(
    region_code: i64,
    year_ref: i64,
    kind_digit: i64,
    variant: Variant,
    config: &BuildConfig,
) -> AihResult<String> {
    let region = non_negative("region code", region_code)?;
    let year = non_negative("year reference", year_ref)?;
    let kind = non_negative("kind digit", kind_digit)?;
    check_kind(kind, config)?;

    let mut value = format!("{:02}{:02}{}{}", region, year, kind, variant.suffix());
    let digit = check_digit::compute(&value, config.check_digit_rule)
        .ok_or_else(|| AihError::Parse(format!("cannot derive check digit of {}", value)))?;

    value.push_str(variant.check_prefix());
    value.push(char::from(b'0' + digit));

    if value.len() != aih_types::AIH_LENGTH {
        tracing::warn!("Built malformed {} AIH {} ({} characters)", variant, value, value.len());
    }
    Ok(value)
}
