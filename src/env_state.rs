//! # Transport environment
//!
//! This module defines the **network collaborator** of the crate: the
//! [`RemoteFetcher`](crate::env_state::RemoteFetcher) contract, its
//! configuration [`DatabaseConfig`](crate::env_state::DatabaseConfig), and the
//! default implementation [`MotionEnv`](crate::env_state::MotionEnv) backed by a
//! persistent [`ureq::Agent`].
//!
//! ## Overview
//!
//! The rest of the crate only needs one synchronous call:
//!
//! ```text
//! fetch(host, path, port) -> raw bytes | TransportFailure
//! ```
//!
//! Timeouts and retries are policies of the collaborator, not of the parser or of the
//! record. [`MotionEnv`](crate::env_state::MotionEnv) applies a global request timeout
//! and retries a failed transport a bounded number of times.
//!
//! ## Structure
//!
//! ```text
//! MotionEnv
//! ├── http_client  (ureq::Agent, global timeout, HTTP statuses returned as bodies)
//! └── retries      (extra attempts after a transport failure)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use peer_motion::env_state::{DatabaseConfig, MotionEnv, RemoteFetcher};
//!
//! let config = DatabaseConfig::default().with_timeout_secs(5);
//! let env = MotionEnv::new(&config);
//!
//! let payload = env
//!     .fetch(&config.host, "/smcat/data/ath/IMPVALL/H-E06230.AT2", config.port)
//!     .unwrap();
//! println!("{} bytes", payload.len());
//! ```
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use ureq::Agent;

use crate::{
    constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS},
    motion_errors::MotionError,
};

/// Source of raw record payloads.
///
/// Implementors turn a host, a path and a port into the body of an HTTP GET.
/// The body is returned untouched, whatever its declared content type.
pub trait RemoteFetcher {
    fn fetch(&self, host: &str, path: &str, port: u16) -> Result<Vec<u8>, MotionError>;
}

impl<F: RemoteFetcher + ?Sized> RemoteFetcher for &F {
    fn fetch(&self, host: &str, path: &str, port: u16) -> Result<Vec<u8>, MotionError> {
        (**self).fetch(host, path, port)
    }
}

/// Location of the strong-motion database and transport policy.
///
/// Every field has a default, so a partial configuration deserializes cleanly:
///
/// ```
/// use peer_motion::env_state::DatabaseConfig;
///
/// let config = DatabaseConfig::default().with_port(8080);
/// assert_eq!(config.host, "peer.berkeley.edu");
/// assert_eq!(config.port, 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
    pub retries: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retries: DEFAULT_RETRIES,
        }
    }
}

impl DatabaseConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// HTTP implementation of [`RemoteFetcher`].
///
/// # Fields
///
/// * `http_client` - A ureq agent reused across requests
/// * `retries` - Number of extra attempts after a transport failure
#[derive(Debug, Clone)]
pub struct MotionEnv {
    http_client: Agent,
    retries: u32,
}

impl Default for MotionEnv {
    fn default() -> Self {
        Self::new(&DatabaseConfig::default())
    }
}

impl MotionEnv {
    /// Create a new transport environment
    ///
    /// Arguments
    /// ---------
    /// * `config`: the database configuration, only the timeout and retry policy are read here
    ///
    /// Return
    /// ------
    /// * A new MotionEnv object
    ///     - The HTTP client applies `config.timeout()` to the whole request
    ///     - Error statuses are not turned into errors, their body is returned as payload
    pub fn new(config: &DatabaseConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .http_status_as_error(false)
            .build();
        let agent: Agent = agent_config.into();

        MotionEnv {
            http_client: agent,
            retries: config.retries,
        }
    }

    fn get_from_url(&self, url: &str) -> Result<Vec<u8>, MotionError> {
        let mut response = self.http_client.get(url).call()?;
        let body = response.body_mut().read_to_vec()?;
        Ok(body)
    }
}

/// Build the URL of a record page.
pub(crate) fn record_url(host: &str, path: &str, port: u16) -> String {
    if path.starts_with('/') {
        format!("http://{host}:{port}{path}")
    } else {
        format!("http://{host}:{port}/{path}")
    }
}

impl RemoteFetcher for MotionEnv {
    fn fetch(&self, host: &str, path: &str, port: u16) -> Result<Vec<u8>, MotionError> {
        let url = record_url(host, path, port);
        let mut attempt = 0;
        loop {
            debug!("GET {url} (attempt {})", attempt + 1);
            match self.get_from_url(&url) {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.retries => {
                    debug!("retrying {url} after transport failure: {err}");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
