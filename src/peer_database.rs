//! # PeerDatabase: configuration and transport for record retrieval
//!
//! This module defines the [`PeerDatabase`](crate::peer_database::PeerDatabase) struct,
//! the facade that wires together:
//!
//! 1. **Configuration** ([`DatabaseConfig`](crate::env_state::DatabaseConfig)): host,
//!    port and transport policy, passed explicitly instead of global constants.
//! 2. **Transport**: any [`RemoteFetcher`](crate::env_state::RemoteFetcher), by default
//!    the ureq-backed [`MotionEnv`](crate::env_state::MotionEnv).
//! 3. **Parsing**: [`parse_record`](crate::record_parser::parse_record) with the shape
//!    announced by the [`RecordRequest`](crate::record_request::RecordRequest).
//!
//! Retrieval is split in two phases, composed only here:
//!
//! ```text
//! RecordRequest ──path──▶ fetch_page ──bytes──▶ parse_record ──▶ ParsedRecord
//! ```
//!
//! so the parser and the record queries never depend on the network.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use peer_motion::env_state::DatabaseConfig;
//! use peer_motion::ground_motion::GroundMotionRecord;
//! use peer_motion::peer_database::PeerDatabase;
//!
//! let database = PeerDatabase::new(DatabaseConfig::default());
//! let record =
//!     GroundMotionRecord::from_database(&database, 1, "IMPVALL", "H-E06230", "-ACCEL", 1.0);
//! println!("{record}, duration: {} s", record.get_duration());
//! ```
//!
//! ## Notes
//!
//! - Nothing is cached: every call fetches the page again.
//! - A request is resolved before any network access, so an unsupported type flag never
//!   costs a round trip.
use crate::{
    env_state::{DatabaseConfig, MotionEnv, RemoteFetcher},
    motion_errors::MotionError,
    record_parser::{parse_record, ParsedRecord},
    record_request::RecordRequest,
};

#[derive(Debug, Clone)]
pub struct PeerDatabase<F: RemoteFetcher = MotionEnv> {
    config: DatabaseConfig,
    fetcher: F,
}

impl Default for PeerDatabase<MotionEnv> {
    fn default() -> Self {
        Self::new(DatabaseConfig::default())
    }
}

impl PeerDatabase<MotionEnv> {
    /// Construct a database facade over HTTP.
    ///
    /// Arguments
    /// -----------------
    /// * `config`: host, port, timeout and retry policy.
    ///
    /// Return
    /// ----------
    /// * A [`PeerDatabase`] whose fetcher is a [`MotionEnv`] built from `config`.
    pub fn new(config: DatabaseConfig) -> Self {
        let fetcher = MotionEnv::new(&config);
        PeerDatabase { config, fetcher }
    }
}

impl<F: RemoteFetcher> PeerDatabase<F> {
    /// Construct a database facade over a custom transport.
    pub fn with_fetcher(config: DatabaseConfig, fetcher: F) -> Self {
        PeerDatabase { config, fetcher }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Raw page of a record, as returned by the transport.
    pub fn fetch_page(&self, request: &RecordRequest) -> Result<Vec<u8>, MotionError> {
        self.fetcher
            .fetch(&self.config.host, &request.path(), self.config.port)
    }

    /// Fetch a record page and parse it with the shape of the request.
    ///
    /// Return
    /// ----------
    /// * The parsed record, or the transport / parse failure.
    pub fn fetch_record(&self, request: &RecordRequest) -> Result<ParsedRecord, MotionError> {
        let page = self.fetch_page(request)?;
        parse_record(&String::from_utf8_lossy(&page), request.shape())
    }
}
