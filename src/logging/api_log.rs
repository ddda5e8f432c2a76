//! Append-only diagnostic log file.
//!
//! Failed gateway calls (and, at higher verbosity, successful ones) are
//! recorded in a pipe-delimited text file, one file per UTC calendar day.
//! The format is fixed and consumed by existing tooling; do not change the
//! separator or field order.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::net::UdpSocket;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::logging::Clock;

/// Field separator used in diagnostic log lines.
const SEPARATOR: &str = "^_^";

/// Writes diagnostic records for gateway calls.
///
/// Each call produces one line in `<dir>/iopsdk.log.YYYY-MM-DD` (date taken
/// from the injected [`Clock`], UTC):
///
/// ```text
/// appkey^_^sdk^_^YYYY-MM-DD HH:MM:SS^_^ip^_^platform^_^url^_^code^_^message
/// ```
///
/// The recorded URL carries every merged request parameter, including the
/// `sign` and `session` values. Existing log consumers depend on this
/// format, so the sensitive fields are written as-is.
///
/// Every line is written with a single append call on a file opened in
/// append mode, so concurrent writers never interleave within a line.
/// A failed append is reported through `tracing` and otherwise ignored; the
/// log is diagnostic output, not an operation result.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use aliexpress_api::logging::{ApiLog, SystemClock};
///
/// let log = ApiLog::new(ApiLog::default_dir(), Arc::new(SystemClock));
/// log.append("33505222", "sdk-v1", "https://api.example.com/sync?code=x", "HTTP_ERROR", "timed out");
/// ```
#[derive(Clone, Debug)]
pub struct ApiLog {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl ApiLog {
    /// Creates a log writing into `dir` with timestamps from `clock`.
    ///
    /// The directory is created on first append if it does not exist.
    pub fn new(dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    /// Returns the default per-user log directory, `<home>/logs`.
    ///
    /// Falls back to a relative `logs` directory when no home directory can
    /// be resolved.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::home_dir().map_or_else(|| PathBuf::from("logs"), |home| home.join("logs"))
    }

    /// Returns the directory this log writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Appends one diagnostic line for a gateway call.
    ///
    /// Successful calls are recorded with empty `code` and `message` fields.
    pub fn append(&self, app_key: &str, sdk_version: &str, request_url: &str, code: &str, message: &str) {
        let now = self.clock.now();
        let timestamp = now.format("%Y-%m-%d %H:%M:%S");
        let line = format!(
            "{app_key}{SEPARATOR}{sdk_version}{SEPARATOR}{timestamp}{SEPARATOR}{ip}{SEPARATOR}{platform}{SEPARATOR}{request_url}{SEPARATOR}{code}{SEPARATOR}{message}\n",
            ip = local_ip(),
            platform = platform(),
        );

        let path = self.dir.join(format!("iopsdk.log.{}", now.format("%Y-%m-%d")));
        if let Err(e) = append_line(&self.dir, &path, &line) {
            tracing::warn!("Failed to append to diagnostic log at {}: {e}", path.display());
        }
    }
}

fn append_line(dir: &Path, path: &Path, line: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    // One write call per line keeps concurrent appends whole.
    file.write_all(line.as_bytes())
}

/// Returns the first routable local IPv4 address, or `127.0.0.1`.
///
/// Binding a UDP socket and connecting it to a public address selects the
/// outbound interface without sending any packet.
fn local_ip() -> String {
    UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| {
            socket.connect("8.8.8.8:80")?;
            socket.local_addr()
        })
        .map_or_else(|_| "127.0.0.1".to_string(), |addr| addr.ip().to_string())
}

/// Returns the OS family and architecture, e.g. `linux x86_64`.
fn platform() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}
