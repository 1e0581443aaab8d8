//! Validated components of an AIH number.
//!
//! Each component wraps a small integer whose range guarantees the
//! fixed-width rendering used in the identifier.

use std::fmt;

use crate::AihKind;

/// Error returned when an integer does not fit an AIH component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// Value outside the component's inclusive range.
    OutOfRange {
        /// Component name.
        component: &'static str,
        /// The rejected value.
        value: i64,
        /// Largest accepted value (the smallest is always 0).
        max: u8,
    },
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                component,
                value,
                max,
            } => write!(f, "{} {} is outside 0..={}", component, value, max),
        }
    }
}

impl std::error::Error for ComponentError {}

fn check_range(component: &'static str, value: i64, max: u8) -> Result<u8, ComponentError> {
    if (0..=i64::from(max)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ComponentError::OutOfRange {
            component,
            value,
            max,
        })
    }
}

/// IBGE code of the federative unit issuing the AIH (two digits).
///
/// # Examples
///
/// ```
/// use aih_types::RegionCode;
///
/// let pe = RegionCode::new(26).unwrap();
/// assert_eq!(pe.to_string(), "26");
/// assert_eq!(RegionCode::new(7).unwrap().to_string(), "07");
/// assert!(RegionCode::new(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub struct RegionCode(u8);

impl RegionCode {
    /// Largest representable region code.
    pub const MAX: u8 = 99;

    /// Creates a region code, rejecting values outside 0..=99.
    pub fn new(value: i64) -> Result<Self, ComponentError> {
        check_range("region code", value, Self::MAX).map(Self)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Reference year of the AIH, kept as its last two digits.
///
/// # Examples
///
/// ```
/// use aih_types::YearRef;
///
/// assert_eq!(YearRef::new(24).unwrap().to_string(), "24");
/// assert_eq!(YearRef::from_calendar_year(2024).to_string(), "24");
/// assert_eq!(YearRef::from_calendar_year(2005).to_string(), "05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub struct YearRef(u8);

impl YearRef {
    /// Largest representable year reference.
    pub const MAX: u8 = 99;

    /// Creates a year reference, rejecting values outside 0..=99.
    pub fn new(value: i64) -> Result<Self, ComponentError> {
        check_range("year reference", value, Self::MAX).map(Self)
    }

    /// Keeps the last two digits of a calendar year.
    pub fn from_calendar_year(year: u32) -> Self {
        Self((year % 100) as u8)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Single digit identifying the kind of AIH.
///
/// # Examples
///
/// ```
/// use aih_types::{AihKind, KindDigit};
///
/// let digit = KindDigit::new(5).unwrap();
/// assert_eq!(digit.kind(), Some(AihKind::Elective));
/// assert_eq!(KindDigit::from(AihKind::General).value(), 1);
/// assert!(KindDigit::new(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub struct KindDigit(u8);

impl KindDigit {
    /// Largest representable kind digit.
    pub const MAX: u8 = 9;

    /// Creates a kind digit, rejecting values outside 0..=9.
    pub fn new(value: i64) -> Result<Self, ComponentError> {
        check_range("kind digit", value, Self::MAX).map(Self)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the documented kind for this digit, if any.
    pub fn kind(self) -> Option<AihKind> {
        AihKind::from_digit(self.0)
    }
}

impl From<AihKind> for KindDigit {
    fn from(kind: AihKind) -> Self {
        Self(kind.to_digit())
    }
}

macro_rules! component_conversions {
    ($($ty:ident => $width:literal),* $(,)?) => {
        $(
            impl TryFrom<i64> for $ty {
                type Error = ComponentError;

                fn try_from(value: i64) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$ty> for u8 {
                fn from(component: $ty) -> u8 {
                    component.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{:0width$}", self.0, width = $width)
                }
            }
        )*
    };
}

component_conversions!(RegionCode => 2, YearRef => 2, KindDigit => 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_code_padding() {
        assert_eq!(RegionCode::new(0).unwrap().to_string(), "00");
        assert_eq!(RegionCode::new(5).unwrap().to_string(), "05");
        assert_eq!(RegionCode::new(99).unwrap().to_string(), "99");
    }

    #[test]
    fn test_region_code_out_of_range() {
        let err = RegionCode::new(100).unwrap_err();
        assert_eq!(
            err,
            ComponentError::OutOfRange {
                component: "region code",
                value: 100,
                max: 99
            }
        );
        assert_eq!(err.to_string(), "region code 100 is outside 0..=99");
        assert!(RegionCode::new(-1).is_err());
    }

    #[test]
    fn test_year_ref() {
        assert_eq!(YearRef::try_from(24).unwrap().value(), 24);
        assert!(YearRef::try_from(2024).is_err());
        assert_eq!(YearRef::from_calendar_year(2100).to_string(), "00");
        assert_eq!(YearRef::from_calendar_year(1999).value(), 99);
    }

    #[test]
    fn test_kind_digit() {
        assert_eq!(KindDigit::new(0).unwrap().to_string(), "0");
        assert_eq!(KindDigit::new(3).unwrap().kind(), Some(AihKind::Cnrac));
        assert_eq!(KindDigit::new(2).unwrap().kind(), None);
        assert!(KindDigit::new(10).is_err());
        assert!(KindDigit::new(-3).is_err());
    }

    #[test]
    fn test_into_u8() {
        let value: u8 = RegionCode::new(35).unwrap().into();
        assert_eq!(value, 35);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: RegionCode = serde_json::from_str("26").unwrap();
        assert_eq!(ok.value(), 26);
        assert!(serde_json::from_str::<RegionCode>("120").is_err());
        assert_eq!(serde_json::to_string(&KindDigit::new(5).unwrap()).unwrap(), "5");
    }
}
