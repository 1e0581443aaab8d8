//! Batch building from CSV requests.
//!
//! A batch file is comma-separated with a header row:
//!
//! ```text
//! region_code,year_ref,kind_digit,variant
//! 26,24,1,initial
//! 26,24,1,final
//! ```
//!
//! Rows that cannot be read as a request are reported as failed outcomes;
//! I/O, CSV and header errors abort the batch.

use std::io::Read;
use std::time::Instant;

use aih_types::Variant;
use csv::{Reader, ReaderBuilder, StringRecord};

use crate::builder::build_with_config;
use crate::types::{AihError, AihResult, BatchStats, BuildConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Expected columns in a batch file.
pub const REQUEST_COLUMNS: &[&str] = &["region_code", "year_ref", "kind_digit", "variant"];

/// One AIH number to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildRequest {
    /// IBGE code of the federative unit.
    pub region_code: i64,
    /// Two-digit reference year.
    pub year_ref: i64,
    /// Kind digit.
    pub kind_digit: i64,
    /// Initial or final number.
    pub variant: Variant,
}

impl BuildRequest {
    /// Parses a request from a CSV record.
    pub fn from_record(record: &StringRecord) -> AihResult<Self> {
        Ok(Self {
            region_code: parse::integer("region_code", record.get(0).unwrap_or(""))?,
            year_ref: parse::integer("year_ref", record.get(1).unwrap_or(""))?,
            kind_digit: parse::integer("kind_digit", record.get(2).unwrap_or(""))?,
            variant: parse::variant(record.get(3).unwrap_or(""))?,
        })
    }

    /// Builds the AIH number for this request.
    pub fn build(&self, config: &BuildConfig) -> AihResult<String> {
        build_with_config(self.region_code, self.year_ref, self.kind_digit, self.variant, config)
    }
}

/// Result of one batch row.
#[derive(Debug)]
pub struct BatchOutcome {
    /// 1-based data row (the header is not counted).
    pub row: usize,
    /// The request, if the row could be read.
    pub request: Option<BuildRequest>,
    /// The built number or the reason it was rejected.
    pub result: AihResult<String>,
}

/// Outcomes of a batch, in input order, with summary statistics.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per non-blank row.
    pub outcomes: Vec<BatchOutcome>,
    /// Summary statistics.
    pub stats: BatchStats,
}

/// A streaming reader of build requests.
pub struct RequestReader<R: Read> {
    reader: Reader<R>,
    records_read: usize,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new request reader, validating the header row.
    pub fn from_reader(reader: R) -> AihResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
        })
    }

    /// Returns the number of data rows read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

fn validate_headers<R: Read>(reader: &mut Reader<R>) -> AihResult<()> {
    let headers = reader.headers()?;

    if headers.len() < REQUEST_COLUMNS.len() {
        return Err(AihError::InvalidHeader {
            expected: REQUEST_COLUMNS.len(),
            found: headers.len(),
        });
    }

    for (i, expected_col) in REQUEST_COLUMNS.iter().enumerate() {
        let found = headers.get(i).unwrap_or("");
        // Handle UTF-8 BOM at start of file
        let found = found.trim_start_matches('\u{feff}');
        if found != *expected_col {
            return Err(AihError::UnexpectedColumn {
                position: i,
                expected: expected_col.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(())
}

impl<R: Read> Iterator for RequestReader<R> {
    type Item = AihResult<BuildRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip empty records
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(BuildRequest::from_record(&record));
                }
                Ok(false) => return None, // End of file
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Builds every request, preserving input order.
///
/// Requests are built in parallel when the `parallel` feature is enabled.
pub fn build_batch(requests: &[BuildRequest], config: &BuildConfig) -> BatchReport {
    let rows: Vec<(usize, AihResult<BuildRequest>)> = requests
        .iter()
        .enumerate()
        .map(|(i, request)| (i + 1, Ok(*request)))
        .collect();
    build_rows(rows, config)
}

/// Reads requests from CSV and builds each of them.
///
/// # Errors
/// Returns an error if the header is invalid or the input cannot be read.
///
/// # Examples
///
/// ```
/// use aih_builder::{batch, BuildConfig};
///
/// let input = "region_code,year_ref,kind_digit,variant\n26,24,1,initial\n26,24,1,final\n";
/// let report = batch::build_csv(input.as_bytes(), &BuildConfig::default()).unwrap();
///
/// assert_eq!(report.stats.built, 2);
/// assert_eq!(report.outcomes[1].result.as_deref().unwrap(), "2624199999996");
/// ```
pub fn build_csv<R: Read>(reader: R, config: &BuildConfig) -> AihResult<BatchReport> {
    let mut requests = RequestReader::from_reader(reader)?;
    let mut rows = Vec::new();

    while let Some(item) = requests.next() {
        let row = requests.records_read();
        match item {
            Ok(request) => rows.push((row, Ok(request))),
            Err(e @ (AihError::Io(_) | AihError::Csv(_))) => return Err(e),
            Err(e) => rows.push((row, Err(e))),
        }
    }

    Ok(build_rows(rows, config))
}

fn build_rows(rows: Vec<(usize, AihResult<BuildRequest>)>, config: &BuildConfig) -> BatchReport {
    let start = Instant::now();

    let build_row = |(row, request): (usize, AihResult<BuildRequest>)| match request {
        Ok(request) => BatchOutcome {
            row,
            request: Some(request),
            result: request.build(config),
        },
        Err(e) => BatchOutcome {
            row,
            request: None,
            result: Err(e),
        },
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<BatchOutcome> = rows.into_par_iter().map(build_row).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<BatchOutcome> = rows.into_iter().map(build_row).collect();

    let built = outcomes.iter().filter(|o| o.result.is_ok()).count();
    for outcome in outcomes.iter() {
        if let Err(e) = &outcome.result {
            tracing::warn!("Row {} rejected: {}", outcome.row, e);
        }
    }

    let stats = BatchStats {
        total_requests: outcomes.len(),
        built,
        failed: outcomes.len() - built,
        build_time_ms: start.elapsed().as_millis() as u64,
    };
    tracing::info!(
        "Built {} of {} AIH numbers in {}ms",
        stats.built,
        stats.total_requests,
        stats.build_time_ms
    );

    BatchReport { outcomes, stats }
}

/// Helper functions for parsing batch field values.
pub mod parse {
    use aih_types::Variant;

    use crate::types::{AihError, AihResult};

    /// Parses a signed integer field.
    pub fn integer(column: &str, value: &str) -> AihResult<i64> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| AihError::Parse(format!("invalid {} value: '{}'", column, value)))
    }

    /// Parses a variant field (`initial`/`final`, `i`/`f`, `true`/`false`).
    pub fn variant(value: &str) -> AihResult<Variant> {
        Variant::parse(value).ok_or_else(|| AihError::InvalidVariant {
            value: value.to_string(),
        })
    }
}
