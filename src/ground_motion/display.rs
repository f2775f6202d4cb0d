//! Human-readable rendering of a [`GroundMotionRecord`].
//!
//! ```
//! use peer_motion::ground_motion::GroundMotionRecord;
//!
//! let record = GroundMotionRecord::from_samples(7, vec![0.5, -0.5, 1.0], 0.01, 2.0);
//! assert_eq!(
//!     record.to_string(),
//!     "Ground motion 7: scale factor: 2 dT: 0.01"
//! );
//! assert_eq!(
//!     record.show().verbose(true).to_string(),
//!     "Ground motion 7: scale factor: 2 dT: 0.01\n samples: 0.5 -0.5 1"
//! );
//! ```
use std::fmt;

use itertools::Itertools;

use super::GroundMotionRecord;

/// Display adaptor returned by [`GroundMotionRecord::show`].
pub struct RecordDisplay<'a> {
    record: &'a GroundMotionRecord,
    verbose: bool,
}

impl<'a> RecordDisplay<'a> {
    /// Also list every raw sample.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl GroundMotionRecord {
    pub fn show(&self) -> RecordDisplay<'_> {
        RecordDisplay {
            record: self,
            verbose: false,
        }
    }
}

impl fmt::Display for RecordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        write!(
            f,
            "Ground motion {}: scale factor: {} dT: {}",
            record.tag(),
            record.scale_factor(),
            record.get_dt()
        )?;
        if self.verbose && !record.is_empty() {
            write!(f, "\n samples: {}", record.samples().iter().join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Display for GroundMotionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.show(), f)
    }
}
