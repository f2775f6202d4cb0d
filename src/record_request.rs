//! # Record requests
//!
//! Resolution of a caller's request into the page to fetch and the text
//! layout to expect.
//!
//! ## Overview
//! -----------------
//! - [`MotionType`] maps the legacy type flags (`-ACCEL`, `ATH`, `-disp`, ...) onto the
//!   acceleration or displacement category.
//! - [`RecordRequest`] names one record in one of the three database layouts and knows
//!   its page path and its [`RecordShape`].
//!
//! | Variant        | Page                                       | Shape         |
//! |----------------|--------------------------------------------|---------------|
//! | `Peer`         | `/smcat/data/{ath,dth}/<eq>/<station>.{AT2,DT2}` | tagged header |
//! | `NgaStation`   | `/nga_files/ath/<eq>/<station>.AT2`        | tagged header |
//! | `Nga`          | `/nga_files/ath/<record id>.AT2`           | columnar      |
//!
//! The NGA layouts only serve acceleration records; asking them for displacement
//! fails with [`MotionError::UnsupportedType`] before any network call.
use std::{fmt, str::FromStr};

use crate::{
    constants::{
        ACCEL_EXTENSION, ACCEL_SEGMENT, DISP_EXTENSION, DISP_SEGMENT, NGA_ROOT, PEER_ROOT,
    },
    motion_errors::MotionError,
    record_parser::RecordShape,
};

/// Physical quantity of a strong-motion time history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionType {
    Acceleration,
    Displacement,
}

impl MotionType {
    /// Category segment of the page path (`ath` / `dth`).
    pub fn segment(&self) -> &'static str {
        match self {
            MotionType::Acceleration => ACCEL_SEGMENT,
            MotionType::Displacement => DISP_SEGMENT,
        }
    }

    /// File extension of the record page (`AT2` / `DT2`).
    pub fn extension(&self) -> &'static str {
        match self {
            MotionType::Acceleration => ACCEL_EXTENSION,
            MotionType::Displacement => DISP_EXTENSION,
        }
    }
}

impl FromStr for MotionType {
    type Err = MotionError;

    fn from_str(flag: &str) -> Result<Self, Self::Err> {
        match flag {
            "ACCEL" | "-accel" | "-ACCEL" | "accel" | "ATH" | "-ATH" => {
                Ok(MotionType::Acceleration)
            }
            "DISP" | "-disp" | "-DISP" | "adisp" | "DTH" | "-DTH" => Ok(MotionType::Displacement),
            _ => Err(MotionError::UnsupportedType(flag.to_string())),
        }
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionType::Acceleration => write!(f, "acceleration"),
            MotionType::Displacement => write!(f, "displacement"),
        }
    }
}

/// One record of the strong-motion database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRequest {
    /// PEER catalog record identified by earthquake and station names.
    Peer {
        earthquake: String,
        station: String,
        motion_type: MotionType,
    },
    /// NGA acceleration record identified by earthquake and station names.
    NgaStation { earthquake: String, station: String },
    /// NGA acceleration record identified by a single combined id.
    Nga { record_id: String },
}

impl RecordRequest {
    /// Resolve a PEER catalog request from a legacy type flag.
    ///
    /// Return
    /// ----------
    /// * The request, or [`MotionError::UnsupportedType`] if the flag is not one of the
    ///   acceleration / displacement aliases.
    pub fn peer(
        earthquake: impl Into<String>,
        station: impl Into<String>,
        type_flag: &str,
    ) -> Result<Self, MotionError> {
        Ok(RecordRequest::Peer {
            earthquake: earthquake.into(),
            station: station.into(),
            motion_type: type_flag.parse()?,
        })
    }

    /// Resolve an NGA request by earthquake and station names.
    ///
    /// Displacement flags are valid aliases but not served by NGA, they fail like
    /// unknown flags.
    pub fn nga_station(
        earthquake: impl Into<String>,
        station: impl Into<String>,
        type_flag: &str,
    ) -> Result<Self, MotionError> {
        nga_acceleration_only(type_flag)?;
        Ok(RecordRequest::NgaStation {
            earthquake: earthquake.into(),
            station: station.into(),
        })
    }

    /// Resolve an NGA request by combined record id.
    pub fn nga(record_id: impl Into<String>, type_flag: &str) -> Result<Self, MotionError> {
        nga_acceleration_only(type_flag)?;
        Ok(RecordRequest::Nga {
            record_id: record_id.into(),
        })
    }

    pub fn motion_type(&self) -> MotionType {
        match self {
            RecordRequest::Peer { motion_type, .. } => *motion_type,
            RecordRequest::NgaStation { .. } | RecordRequest::Nga { .. } => {
                MotionType::Acceleration
            }
        }
    }

    /// Text layout of the page served for this request.
    pub fn shape(&self) -> RecordShape {
        match self {
            RecordRequest::Peer { .. } | RecordRequest::NgaStation { .. } => {
                RecordShape::TaggedHeader
            }
            RecordRequest::Nga { .. } => RecordShape::Columnar,
        }
    }

    /// Path of the record page on the database host.
    pub fn path(&self) -> String {
        let motion_type = self.motion_type();
        let (segment, extension) = (motion_type.segment(), motion_type.extension());
        match self {
            RecordRequest::Peer {
                earthquake,
                station,
                ..
            } => format!("{PEER_ROOT}/{segment}/{earthquake}/{station}.{extension}"),
            RecordRequest::NgaStation {
                earthquake,
                station,
            } => format!("{NGA_ROOT}/{segment}/{earthquake}/{station}.{extension}"),
            RecordRequest::Nga { record_id } => {
                format!("{NGA_ROOT}/{segment}/{record_id}.{extension}")
            }
        }
    }
}

fn nga_acceleration_only(type_flag: &str) -> Result<(), MotionError> {
    match type_flag.parse()? {
        MotionType::Acceleration => Ok(()),
        MotionType::Displacement => Err(MotionError::UnsupportedType(type_flag.to_string())),
    }
}
