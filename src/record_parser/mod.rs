//! # Strong-motion record parser
//!
//! Turns the raw text of a database page into a validated time series:
//! a point count, a time step and the ordered raw samples.
//!
//! ## Overview
//! -----------------
//! The pages are not machine generated with strict delimiters, so the parser scans for
//! markers instead of following a grammar, and reads the samples as a free stream of
//! numbers separated by any run of whitespace or newlines.
//!
//! Two layouts are understood, see [`RecordShape`]:
//!
//! ```text
//! TaggedHeader                              Columnar
//! ------------------------------------      ------------------------------------
//! PEER STRONG MOTION DATABASE RECORD        PEER NGA STRONG MOTION DATABASE RECORD
//! IMPERIAL VALLEY 10/15/79, EL CENTRO #6    IMPERIAL VALLEY 10/15/79, EL CENTRO #6
//! ACCELERATION TIME HISTORY IN UNITS OF G   ACCELERATION TIME HISTORY IN UNITS OF G
//! NPTS=  3930, DT=   .0100 SEC              3930 0.0100 NPTS, DT
//!   .2305E-02  .2450E-02 ...                  .2305E-02  .2450E-02 ...
//! ```
//!
//! ## Error Handling
//! -----------------
//! Every failure aborts the whole record, no partially filled sequence is ever
//! returned. The checks run in this order:
//!
//! 1. [`MotionError::EmptyPayload`] – nothing but whitespace was received.
//! 2. [`MotionError::NotFound`] – the server reports a missing page.
//! 3. [`MotionError::MissingField`] – the point count or the time step cannot be located.
//! 4. [`MotionError::EmptyData`] – the record declares zero points.
//! 5. [`MotionError::InvalidTimeStep`] – the time step is not strictly positive.
//! 6. [`MotionError::Truncated`] – fewer numbers than declared follow the header.
pub mod columnar;
pub mod tagged_header;

use std::fmt;

use nom::{
    character::complete::multispace0, number::complete::double, sequence::preceded, IResult,
    Parser,
};

use crate::{constants::NOT_FOUND_MARKERS, motion_errors::MotionError};

/// Text layout of a record page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// `NPTS= <n>` and `DT= <dt> <unit>` tags somewhere in a free header.
    TaggedHeader,
    /// Three free header lines, then a `<n> <dt> ...` line.
    Columnar,
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordShape::TaggedHeader => write!(f, "tagged header"),
            RecordShape::Columnar => write!(f, "columnar"),
        }
    }
}

/// Result of a successful parse.
///
/// `samples.len() == n_pts` and `time_step > 0` always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub n_pts: usize,
    pub time_step: f64,
    pub samples: Vec<f64>,
}

/// Parse a record page of the given shape.
///
/// Arguments
/// -----------------
/// * `payload`: the raw page text.
/// * `shape`: the layout announced by the request that produced the page.
///
/// Return
/// ----------
/// * The parsed record, or the first [`MotionError`] met while scanning.
pub fn parse_record(payload: &str, shape: RecordShape) -> Result<ParsedRecord, MotionError> {
    check_payload(payload)?;
    match shape {
        RecordShape::TaggedHeader => tagged_header::parse_tagged_header(payload),
        RecordShape::Columnar => columnar::parse_columnar(payload),
    }
}

/// Reject empty pages and the server's "not found" pages.
fn check_payload(payload: &str) -> Result<(), MotionError> {
    if payload.trim().is_empty() {
        return Err(MotionError::EmptyPayload);
    }
    if NOT_FOUND_MARKERS
        .iter()
        .any(|marker| payload.contains(marker))
    {
        return Err(MotionError::NotFound);
    }
    Ok(())
}

/// Validate the header fields shared by both shapes and read the samples that follow.
pub(crate) fn build_record(
    n_pts: usize,
    time_step: f64,
    data: &str,
) -> Result<ParsedRecord, MotionError> {
    if n_pts == 0 {
        return Err(MotionError::EmptyData);
    }
    if !time_step.is_finite() || time_step <= 0.0 {
        return Err(MotionError::InvalidTimeStep(time_step));
    }
    let samples = read_samples(data, n_pts)?;
    Ok(ParsedRecord {
        n_pts,
        time_step,
        samples,
    })
}

/// One number of the sample stream, after any run of whitespace.
pub(crate) fn sample(input: &str) -> IResult<&str, f64> {
    preceded(multispace0, double).parse(input)
}

/// Read exactly `n_pts` numbers from the start of `input`.
///
/// Anything after the last expected number is ignored. The first token that does not
/// read as a number ends the stream, and the samples read so far are reported.
pub(crate) fn read_samples(mut input: &str, n_pts: usize) -> Result<Vec<f64>, MotionError> {
    let mut samples = Vec::with_capacity(n_pts);
    while samples.len() < n_pts {
        match sample(input) {
            Ok((rest, value)) => {
                samples.push(value);
                input = rest;
            }
            Err(_) => {
                return Err(MotionError::Truncated {
                    expected: n_pts,
                    found: samples.len(),
                })
            }
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod record_parser_test {
    use super::*;

    #[test]
    fn test_empty_payload() {
        assert_eq!(
            parse_record("", RecordShape::TaggedHeader),
            Err(MotionError::EmptyPayload)
        );
        assert_eq!(
            parse_record(" \n\t\n", RecordShape::Columnar),
            Err(MotionError::EmptyPayload)
        );
    }

    #[test]
    fn test_not_found_has_priority() {
        let page = "<html><title>Page Not Found</title> NPTS= 4, DT= 0.01 SEC 1 2 3 4</html>";
        assert_eq!(
            parse_record(page, RecordShape::TaggedHeader),
            Err(MotionError::NotFound)
        );
        assert_eq!(
            parse_record("<h1>404 Not Found</h1>", RecordShape::Columnar),
            Err(MotionError::NotFound)
        );
    }

    #[test]
    fn test_read_samples_whitespace() {
        let samples = read_samples("  1.0\n\n -2.5e-1\t3\r\n.5 trailing", 4).unwrap();
        assert_eq!(samples, vec![1.0, -0.25, 3.0, 0.5]);
    }

    #[test]
    fn test_read_samples_fortran_columns() {
        let samples = read_samples(" .2305E-02-.1200E-01 0.1000E+01", 3).unwrap();
        assert_eq!(samples, vec![0.002305, -0.012, 1.0]);
    }

    #[test]
    fn test_read_samples_ignores_extra_numbers() {
        let samples = read_samples("1 2 3 4 5", 3).unwrap();
        assert_eq!(samples, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_samples_truncated() {
        assert_eq!(
            read_samples("1.0 2.0", 4),
            Err(MotionError::Truncated {
                expected: 4,
                found: 2
            })
        );
        assert_eq!(
            read_samples("1.0 2.0 END 3.0 4.0", 4),
            Err(MotionError::Truncated {
                expected: 4,
                found: 2
            })
        );
        assert_eq!(
            read_samples("1.0 2.0 3.0e\n", 3),
            Err(MotionError::Truncated {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            read_samples("", 1),
            Err(MotionError::Truncated {
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_build_record_validation() {
        assert_eq!(build_record(0, 0.01, "1 2"), Err(MotionError::EmptyData));
        assert_eq!(
            build_record(2, 0.0, "1 2"),
            Err(MotionError::InvalidTimeStep(0.0))
        );
        assert_eq!(
            build_record(2, -0.01, "1 2"),
            Err(MotionError::InvalidTimeStep(-0.01))
        );
        assert!(matches!(
            build_record(2, f64::NAN, "1 2"),
            Err(MotionError::InvalidTimeStep(_))
        ));
        assert_eq!(
            build_record(2, 0.01, "1 2"),
            Ok(ParsedRecord {
                n_pts: 2,
                time_step: 0.01,
                samples: vec![1.0, 2.0]
            })
        );
    }
}
