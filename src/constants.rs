//! # Constants for the strong-motion database client
//!
//! This module centralizes the **network defaults**, **request path segments** and
//! **payload markers** used by the retrieval and parsing pipeline.
//!
//! ## Overview
//!
//! - Default host, port and timeout of the PEER strong-motion database
//! - Path segments and file extensions per motion category
//! - Markers searched for in the raw text payloads

// -------------------------------------------------------------------------------------------------
// Network defaults
// -------------------------------------------------------------------------------------------------

/// Host serving the PEER / NGA strong-motion records
pub const DEFAULT_HOST: &str = "peer.berkeley.edu";

/// HTTP port of the database
pub const DEFAULT_PORT: u16 = 80;

/// Global timeout of one HTTP request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Extra attempts after a transport failure
pub const DEFAULT_RETRIES: u32 = 1;

// -------------------------------------------------------------------------------------------------
// Request paths
// -------------------------------------------------------------------------------------------------

/// Root of the PEER strong-motion catalog
pub const PEER_ROOT: &str = "/smcat/data";

/// Root of the NGA flat files
pub const NGA_ROOT: &str = "/nga_files";

/// Category segment for acceleration time histories
pub const ACCEL_SEGMENT: &str = "ath";

/// Category segment for displacement time histories
pub const DISP_SEGMENT: &str = "dth";

/// File extension of acceleration records
pub const ACCEL_EXTENSION: &str = "AT2";

/// File extension of displacement records
pub const DISP_EXTENSION: &str = "DT2";

// -------------------------------------------------------------------------------------------------
// Payload markers
// -------------------------------------------------------------------------------------------------

/// Strings the server puts in the body when the requested record does not exist
pub const NOT_FOUND_MARKERS: [&str; 2] = ["Page Not Found", "404 Not Found"];

/// Header token announcing the number of points (tagged-header records)
pub const NPTS_MARKER: &str = "NPTS";

/// Header token announcing the time step (tagged-header records)
pub const DT_MARKER: &str = "DT";

/// Lowercase fallback of [`DT_MARKER`]
pub const DT_MARKER_LOWER: &str = "dt";

/// Width of the separator following the time step token (`"= "`)
pub const DT_SEPARATOR_WIDTH: usize = 2;

/// Maximum number of unit labels skipped after the time step
pub const MAX_UNIT_LABELS: usize = 2;

/// Free-text header lines preceding the count line in columnar records
pub const COLUMNAR_HEADER_LINES: usize = 3;
