//! # peer_motion
//!
//! Retrieval of named strong-motion earthquake records from the PEER / NGA
//! strong-motion database, tolerant parsing of their legacy text layouts, and
//! time-domain queries (interpolated load factor, peak, duration) on the
//! resulting record.
//!
//! ```text
//! RecordRequest ─▶ RemoteFetcher ─▶ record_parser ─▶ GroundMotionRecord ─▶ get_factor(t)
//! ```
pub mod constants;
pub mod env_state;
pub mod ground_motion;
pub mod motion_errors;
pub mod peer_database;
pub mod record_parser;
pub mod record_request;

pub use env_state::{DatabaseConfig, MotionEnv, RemoteFetcher};
pub use ground_motion::GroundMotionRecord;
pub use motion_errors::{MotionError, RecordField};
pub use peer_database::PeerDatabase;
pub use record_parser::{parse_record, ParsedRecord, RecordShape};
pub use record_request::{MotionType, RecordRequest};
