#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use peer_motion::{MotionError, RemoteFetcher};

/// Fetcher answering every request with the same canned result.
pub struct MockFetcher {
    response: Result<Vec<u8>, MotionError>,
    calls: Cell<usize>,
    paths: RefCell<Vec<String>>,
}

impl MockFetcher {
    pub fn page(text: &str) -> Self {
        Self::with_response(Ok(text.as_bytes().to_vec()))
    }

    pub fn unreachable() -> Self {
        Self::with_response(Err(MotionError::TransportFailure(
            "connection refused".into(),
        )))
    }

    fn with_response(response: Result<Vec<u8>, MotionError>) -> Self {
        MockFetcher {
            response,
            calls: Cell::new(0),
            paths: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl RemoteFetcher for MockFetcher {
    fn fetch(&self, _host: &str, path: &str, _port: u16) -> Result<Vec<u8>, MotionError> {
        self.calls.set(self.calls.get() + 1);
        self.paths.borrow_mut().push(path.to_string());
        self.response.clone()
    }
}

/// PEER catalog page with four samples every 0.02 s.
pub const PEER_PAGE: &str = "PEER STRONG MOTION DATABASE RECORD. PROCESSING BY PACIFIC ENGINEERING.
LOMA PRIETA 10/18/89 00:05, GILROY ARRAY #1, 090
ACCELERATION TIME HISTORY IN UNITS OF G
NPTS= 4, DT= 0.0200 SEC
1.0 2.0 3.0 4.0
";

/// Columnar NGA page with three samples every 0.01 s.
pub const NGA_COLUMNAR_PAGE: &str = "line1\nline2\nline3\n3 0.01 extra\n0.5 -0.5 1.0\n";

pub const NOT_FOUND_PAGE: &str =
    "<html><head><title>Page Not Found</title></head><body>missing</body></html>";
