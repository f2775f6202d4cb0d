//! # Ground-motion records
//!
//! This module defines [`GroundMotionRecord`], one strong-motion time history
//! (acceleration or displacement) used as a load factor by a simulation.
//!
//! ## Lifecycle
//! -----------------
//! A record is built once and never mutated afterwards. It is either
//!
//! - **Populated**: samples and a strictly positive time step, or
//! - **Empty**: no samples, with the [`MotionError`] that prevented it from being
//!   populated kept for inspection ([`GroundMotionRecord::failure`]).
//!
//! Construction never fails: fetch and parse errors are logged with [`log::warn!`] and
//! degrade the record to Empty. Every query is total and answers `0` / `0.0` on an
//! Empty record.
//!
//! ## Construction paths
//! -----------------
//! | Constructor | Source |
//! |---|---|
//! | [`from_database`](GroundMotionRecord::from_database) | PEER catalog, earthquake + station |
//! | [`from_nga_station`](GroundMotionRecord::from_nga_station) | NGA flat files, earthquake + station |
//! | [`from_nga_database`](GroundMotionRecord::from_nga_database) | NGA flat files, combined record id |
//! | [`from_payload`](GroundMotionRecord::from_payload) | page text already at hand |
//! | [`from_samples`](GroundMotionRecord::from_samples) | caller-supplied samples, no network |
//!
//! ## Scale factor
//! -----------------
//! The scale factor is applied at query time only, [`samples`](GroundMotionRecord::samples)
//! always returns the raw values.
//!
//! ```
//! use peer_motion::ground_motion::GroundMotionRecord;
//!
//! let record = GroundMotionRecord::from_samples(1, vec![1.0, 2.0, 3.0, 4.0], 0.02, 2.0);
//! assert_eq!(record.get_factor(0.01), 3.0);
//! assert_eq!(record.get_peak_factor(), 8.0);
//! assert_eq!(record.samples(), &[1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! Callers without a scaling of their own pass [`DEFAULT_SCALE_FACTOR`]:
//!
//! ```
//! use peer_motion::ground_motion::{GroundMotionRecord, DEFAULT_SCALE_FACTOR};
//!
//! let record = GroundMotionRecord::from_samples(1, vec![1.0, -3.0], 0.01, DEFAULT_SCALE_FACTOR);
//! assert_eq!(record.get_peak_factor(), 3.0);
//! ```
pub mod display;
pub mod interpolation;

use log::{info, warn};

use crate::{
    env_state::RemoteFetcher,
    motion_errors::MotionError,
    peer_database::PeerDatabase,
    record_parser::{parse_record, ParsedRecord, RecordShape},
    record_request::RecordRequest,
};

use interpolation::{interpolate, peak_abs};

/// Scale factor used when the caller does not provide one.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GroundMotionRecord {
    tag: i32,
    time_step: f64,
    scale_factor: f64,
    samples: Vec<f64>,
    failure: Option<MotionError>,
}

impl GroundMotionRecord {
    /// Build a record from caller-supplied samples, without any network access.
    ///
    /// A non-empty sequence with a time step that is not strictly positive gives an Empty
    /// record carrying [`MotionError::InvalidTimeStep`]; an empty sequence gives an Empty
    /// record carrying [`MotionError::EmptyData`].
    pub fn from_samples(tag: i32, samples: Vec<f64>, time_step: f64, scale_factor: f64) -> Self {
        if samples.is_empty() {
            return Self::empty(tag, scale_factor, MotionError::EmptyData);
        }
        if !time_step.is_finite() || time_step <= 0.0 {
            return Self::empty(tag, scale_factor, MotionError::InvalidTimeStep(time_step));
        }
        GroundMotionRecord {
            tag,
            time_step,
            scale_factor,
            samples,
            failure: None,
        }
    }

    /// Build a record from the raw text of a record page.
    ///
    /// The bytes are decoded as UTF-8, invalid sequences are replaced rather than
    /// rejected.
    pub fn from_payload(tag: i32, payload: &[u8], shape: RecordShape, scale_factor: f64) -> Self {
        let text = String::from_utf8_lossy(payload);
        match parse_record(&text, shape) {
            Ok(parsed) => Self::from_parsed(tag, parsed, scale_factor),
            Err(err) => {
                warn!("GroundMotionRecord {tag}: could not parse {shape} record: {err}");
                Self::empty(tag, scale_factor, err)
            }
        }
    }

    /// Fetch and parse a PEER catalog record.
    ///
    /// Arguments
    /// -----------------
    /// * `database`: the database facade providing the configuration and the fetcher.
    /// * `tag`: identifier echoed in diagnostics.
    /// * `earthquake`, `station`: path components of the record page.
    /// * `type_flag`: one of the acceleration (`-ACCEL`, `ATH`, ...) or displacement
    ///   (`-DISP`, `DTH`, ...) aliases.
    /// * `scale_factor`: multiplier applied by the queries.
    ///
    /// Return
    /// ----------
    /// * A Populated record, or an Empty one holding the failure. An unknown flag fails
    ///   with [`MotionError::UnsupportedType`] before any network call.
    pub fn from_database<F: RemoteFetcher>(
        database: &PeerDatabase<F>,
        tag: i32,
        earthquake: &str,
        station: &str,
        type_flag: &str,
        scale_factor: f64,
    ) -> Self {
        let request = RecordRequest::peer(earthquake, station, type_flag);
        Self::from_resolved(database, tag, request, scale_factor)
    }

    /// Fetch and parse an NGA record named by earthquake and station.
    ///
    /// Only acceleration flags are accepted.
    pub fn from_nga_station<F: RemoteFetcher>(
        database: &PeerDatabase<F>,
        tag: i32,
        earthquake: &str,
        station: &str,
        type_flag: &str,
        scale_factor: f64,
    ) -> Self {
        let request = RecordRequest::nga_station(earthquake, station, type_flag);
        Self::from_resolved(database, tag, request, scale_factor)
    }

    /// Fetch and parse a columnar NGA record named by its combined id.
    ///
    /// Only acceleration flags are accepted, displacement is rejected with
    /// [`MotionError::UnsupportedType`].
    pub fn from_nga_database<F: RemoteFetcher>(
        database: &PeerDatabase<F>,
        tag: i32,
        record_id: &str,
        type_flag: &str,
        scale_factor: f64,
    ) -> Self {
        let request = RecordRequest::nga(record_id, type_flag);
        Self::from_resolved(database, tag, request, scale_factor)
    }

    /// Fetch and parse the record named by an already resolved request.
    pub fn from_request<F: RemoteFetcher>(
        database: &PeerDatabase<F>,
        tag: i32,
        request: &RecordRequest,
        scale_factor: f64,
    ) -> Self {
        match database.fetch_record(request) {
            Ok(parsed) => Self::from_parsed(tag, parsed, scale_factor),
            Err(err) => {
                warn!(
                    "GroundMotionRecord {tag}: could not get data for page {}: {err}",
                    request.path()
                );
                Self::empty(tag, scale_factor, err)
            }
        }
    }

    fn from_resolved<F: RemoteFetcher>(
        database: &PeerDatabase<F>,
        tag: i32,
        request: Result<RecordRequest, MotionError>,
        scale_factor: f64,
    ) -> Self {
        match request {
            Ok(request) => Self::from_request(database, tag, &request, scale_factor),
            Err(err) => {
                warn!("GroundMotionRecord {tag}: {err}");
                Self::empty(tag, scale_factor, err)
            }
        }
    }

    fn from_parsed(tag: i32, parsed: ParsedRecord, scale_factor: f64) -> Self {
        info!(
            "GroundMotionRecord {tag}: {} points, dT = {}",
            parsed.n_pts, parsed.time_step
        );
        GroundMotionRecord {
            tag,
            time_step: parsed.time_step,
            scale_factor,
            samples: parsed.samples,
            failure: None,
        }
    }

    fn empty(tag: i32, scale_factor: f64, failure: MotionError) -> Self {
        GroundMotionRecord {
            tag,
            time_step: 0.0,
            scale_factor,
            samples: Vec::new(),
            failure: Some(failure),
        }
    }

    pub fn tag(&self) -> i32 {
        self.tag
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Raw samples, without the scale factor.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Why the record is Empty, `None` for a Populated record.
    pub fn failure(&self) -> Option<&MotionError> {
        self.failure.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Scaled, linearly interpolated value at `pseudo_time`.
    ///
    /// See [`interpolate`] for the boundary rules: nothing is extrapolated, and a
    /// query at or after the time of the last sample returns `0.0`.
    pub fn get_factor(&self, pseudo_time: f64) -> f64 {
        interpolate(
            &self.samples,
            self.time_step,
            self.scale_factor,
            pseudo_time,
        )
    }

    /// `n_pts * dT`, `0.0` on an Empty record.
    pub fn get_duration(&self) -> f64 {
        if self.is_empty() {
            warn!(
                "GroundMotionRecord {}: get_duration() on empty record",
                self.tag
            );
            return 0.0;
        }
        self.samples.len() as f64 * self.time_step
    }

    /// Scaled largest absolute sample, `0.0` on an Empty record.
    pub fn get_peak_factor(&self) -> f64 {
        match peak_abs(&self.samples) {
            Some(peak) => peak * self.scale_factor,
            None => {
                warn!(
                    "GroundMotionRecord {}: get_peak_factor() on empty record",
                    self.tag
                );
                0.0
            }
        }
    }

    /// Always `1.0`.
    ///
    /// The time increment is not derived from the record yet; callers get the same
    /// constant placeholder whatever `pseudo_time` is.
    // TODO: return the sample spacing around `pseudo_time` once the simulation side
    // needs a variable increment.
    pub fn get_time_incr(&self, _pseudo_time: f64) -> f64 {
        1.0
    }

    /// Raw time step, `0.0` on an Empty record.
    pub fn get_dt(&self) -> f64 {
        self.time_step
    }

    pub fn get_n_pts(&self) -> usize {
        self.samples.len()
    }
}
