//! Columnar NGA station records.
//!
//! ```text
//! line 1..3 : free text, discarded
//! line 4    : <nPts> <dT> trailing text
//! line 5..  : sample stream
//! ```
use nom::{
    character::complete::{digit1, space0, space1},
    number::complete::double,
    sequence::preceded,
    IResult, Parser,
};

use crate::{
    constants::COLUMNAR_HEADER_LINES,
    motion_errors::{MotionError, RecordField},
};

use super::{build_record, ParsedRecord};

pub(crate) fn parse_columnar(payload: &str) -> Result<ParsedRecord, MotionError> {
    let count_line =
        skip_header_lines(payload).ok_or(MotionError::MissingField(RecordField::Npts))?;

    let (rest, n_pts) = point_count(count_line)?;
    let (rest, time_step) = preceded(space1, double)
        .parse(rest)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| {
            MotionError::MissingField(RecordField::Dt)
        })?;

    build_record(n_pts, time_step, next_line(rest))
}

/// Text after the free header lines, `None` if the page is shorter.
fn skip_header_lines(payload: &str) -> Option<&str> {
    let mut rest = payload;
    for _ in 0..COLUMNAR_HEADER_LINES {
        let end = rest.find('\n')?;
        rest = &rest[end + 1..];
    }
    Some(rest)
}

fn count(input: &str) -> IResult<&str, &str> {
    preceded(space0, digit1).parse(input)
}

fn point_count(line: &str) -> Result<(&str, usize), MotionError> {
    let missing = MotionError::MissingField(RecordField::Npts);
    let (rest, digits) = count(line).map_err(|_| missing.clone())?;
    let n_pts = digits.parse().map_err(|_| missing)?;
    Ok((rest, n_pts))
}

/// Start of the line following `input`'s first line, empty if there is none.
fn next_line(input: &str) -> &str {
    match input.find('\n') {
        Some(end) => &input[end + 1..],
        None => "",
    }
}
