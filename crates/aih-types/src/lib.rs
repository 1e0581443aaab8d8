//! # aih-types
//!
//! Type definitions for AIH (Autorização de Internação Hospitalar) numbers.
//!
//! This crate provides the value types of a 13-digit hospital admission
//! authorization number: its validated components, the Initial/Final
//! variant, the modulo-11 check digit, and well-known IBGE state codes.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use aih_types::{AihKind, AihNumber, KindDigit, RegionCode, Variant, YearRef};
//! use aih_types::well_known;
//!
//! let number = AihNumber::new(
//!     RegionCode::new(well_known::PE.into()).unwrap(),
//!     YearRef::from_calendar_year(2024),
//!     KindDigit::from(AihKind::General),
//!     Variant::Final,
//! );
//!
//! assert_eq!(number.as_str(), "2624199999996");
//! assert_eq!(number.kind_digit().kind(), Some(AihKind::General));
//! ```

#![warn(missing_docs)]

pub mod check_digit;
mod component;
mod enums;
mod number;
pub mod well_known;

// Re-export all public types at crate root
pub use component::{ComponentError, KindDigit, RegionCode, YearRef};
pub use enums::{AihKind, CheckDigitRule, Variant};
pub use number::{AihNumber, AIH_LENGTH, BODY_LENGTH};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        // Verify all types are accessible from crate root
        let _variant = Variant::Initial;
        let _kind = AihKind::Cnrac;
        let _rule = CheckDigitRule::Body;
        let _region = RegionCode::new(26).unwrap();
        let _year = YearRef::new(24).unwrap();
        let _digit = KindDigit::new(1).unwrap();
        assert_eq!(AIH_LENGTH, 13);
        assert_eq!(BODY_LENGTH, 9);
    }

    #[test]
    fn test_well_known_accessible() {
        assert_eq!(well_known::PE, 26);
        assert_eq!(well_known::SP, 35);
    }

    #[test]
    fn test_pair_differs_only_in_framing_and_check_digit() {
        let (initial, last) = AihNumber::pair(
            RegionCode::new(26).unwrap(),
            YearRef::new(24).unwrap(),
            KindDigit::new(1).unwrap(),
        );
        assert_eq!(&initial.as_str()[..5], &last.as_str()[..5]);
        assert_eq!(&initial.as_str()[5..12], "0000000");
        assert_eq!(&last.as_str()[5..12], "9999999");
    }
}
