//! Tagged-header records (`NPTS= <n>, DT= <dt> <unit>`).
//!
//! The point count is the integer after the first `=` following the first `NPTS`.
//! The time step is the number after the first `DT` of the page (or `dt` when no
//! uppercase tag exists) and a separator at most as wide as `"= "`. Up to two unit
//! labels (`SEC`, ...) may follow it before the sample stream starts.
use std::sync::LazyLock;

use nom::{
    bytes::complete::{take_till1, take_while_m_n},
    character::complete::multispace0,
    number::complete::double,
    sequence::preceded,
    IResult, Parser,
};
use regex::Regex;

use crate::{
    constants::{
        DT_MARKER, DT_MARKER_LOWER, DT_SEPARATOR_WIDTH, MAX_UNIT_LABELS, NPTS_MARKER,
    },
    motion_errors::{MotionError, RecordField},
};

use super::{build_record, sample, ParsedRecord};

static NPTS_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NPTS[^=]*=\s*(\d*)").expect("valid NPTS regex"));

pub(crate) fn parse_tagged_header(payload: &str) -> Result<ParsedRecord, MotionError> {
    let n_pts = point_count(payload)?;
    let (time_step, rest) = time_step_field(payload)?;
    let data = skip_unit_labels(rest);
    build_record(n_pts, time_step, data)
}

fn point_count(payload: &str) -> Result<usize, MotionError> {
    let missing = MotionError::MissingField(RecordField::Npts);
    if !payload.contains(NPTS_MARKER) {
        return Err(missing);
    }
    let digits = NPTS_FIELD
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| missing.clone())?;
    digits.parse().map_err(|_| missing)
}

fn dt_separator(input: &str) -> IResult<&str, &str> {
    take_while_m_n(0, DT_SEPARATOR_WIDTH, |c: char| c == '=' || c.is_whitespace()).parse(input)
}

/// Locate the time step and return it with the text that follows it.
fn time_step_field(payload: &str) -> Result<(f64, &str), MotionError> {
    let start = payload
        .find(DT_MARKER)
        .or_else(|| payload.find(DT_MARKER_LOWER))
        .ok_or(MotionError::MissingField(RecordField::Dt))?;
    let after_marker = &payload[start + DT_MARKER.len()..];

    let (rest, dt) = preceded((dt_separator, multispace0), double)
        .parse(after_marker)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| {
            MotionError::MissingField(RecordField::Dt)
        })?;
    Ok((dt, rest))
}

fn unit_label(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(|c: char| c.is_whitespace())).parse(input)
}

/// Skip the unit labels written after the time step.
///
/// A token that reads as a number is the first sample and stops the skip.
fn skip_unit_labels(mut input: &str) -> &str {
    for _ in 0..MAX_UNIT_LABELS {
        if sample(input).is_ok() {
            break;
        }
        match unit_label(input) {
            Ok((rest, _)) => input = rest,
            Err(_) => break,
        }
    }
    input
}
