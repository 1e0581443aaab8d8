//! Presentation of build and verification results.

use aih_builder::{AihRange, BatchReport};
use aih_types::{well_known, AihKind, AihNumber, Variant};
use serde::Serialize;

/// JSON view of a built AIH number.
#[derive(Debug, Serialize)]
pub struct NumberView<'a> {
    pub aih: &'a str,
    pub variant: Variant,
    pub uf: Option<&'static str>,
    pub kind: Option<AihKind>,
    pub check_digit: u8,
}

impl<'a> From<&'a AihNumber> for NumberView<'a> {
    fn from(number: &'a AihNumber) -> Self {
        Self {
            aih: number.as_str(),
            variant: number.variant(),
            uf: well_known::uf_abbreviation(number.region_code().value()),
            kind: number.kind_digit().kind(),
            check_digit: number.check_digit(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RangeView<'a> {
    initial: NumberView<'a>,
    #[serde(rename = "final")]
    last: NumberView<'a>,
}

#[derive(Debug, Serialize)]
struct VerifyView<'a> {
    candidate: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchRowView {
    row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    aih: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Label used when printing a number of the given kind and variant.
pub fn label(kind: Option<AihKind>, variant: Variant) -> String {
    let kind = match kind {
        Some(AihKind::Elective) => "AIH Eletiva",
        Some(AihKind::Cnrac) => "AIH CNRAC",
        _ => "AIH",
    };
    let variant = match variant {
        Variant::Initial => "Inicial",
        Variant::Final => "Final",
    };
    format!("{} {}", kind, variant)
}

pub fn print_number(number: &AihNumber, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&NumberView::from(number))?);
    } else {
        println!("{}", number);
    }
    Ok(())
}

pub fn print_range(range: &AihRange, json: bool) -> serde_json::Result<()> {
    if json {
        let view = RangeView {
            initial: NumberView::from(&range.initial),
            last: NumberView::from(&range.last),
        };
        println!("{}", serde_json::to_string(&view)?);
    } else {
        for number in [&range.initial, &range.last] {
            let label = label(number.kind_digit().kind(), number.variant());
            println!("{}: {}", label, number);
        }
    }
    Ok(())
}

pub fn print_verification(candidate: &str, error: Option<&aih_builder::AihError>, json: bool) -> serde_json::Result<()> {
    if json {
        let view = VerifyView {
            candidate,
            valid: error.is_none(),
            error: error.map(ToString::to_string),
        };
        println!("{}", serde_json::to_string(&view)?);
    } else {
        match error {
            None => println!("{}: OK", candidate),
            Some(e) => println!("{}: INVALID ({})", candidate, e),
        }
    }
    Ok(())
}

pub fn print_batch(report: &BatchReport, json: bool) -> serde_json::Result<()> {
    for outcome in &report.outcomes {
        if json {
            let view = BatchRowView {
                row: outcome.row,
                aih: outcome.result.as_ref().ok().cloned(),
                error: outcome.result.as_ref().err().map(ToString::to_string),
            };
            println!("{}", serde_json::to_string(&view)?);
        } else {
            match &outcome.result {
                Ok(value) => println!("{}\t{}", outcome.row, value),
                Err(e) => println!("{}\tERROR\t{}", outcome.row, e),
            }
        }
    }
    Ok(())
}
