//! Diagnostic logging for gateway calls.
//!
//! This module provides the components the client uses to record call
//! outcomes:
//!
//! - [`ApiLog`]: the append-only, per-day diagnostic log file
//! - [`Clock`]: the injectable time source behind timestamps and file names
//! - [`SystemClock`]: the real clock used by default
//! - [`FixedClock`]: a frozen clock for deterministic tests
//!
//! Both the log and the clock are injected into
//! [`IopClient`](crate::IopClient) at construction, so tests can pin the
//! timestamp system parameter and the log destination without touching
//! global state.

mod api_log;
mod clock;

pub use api_log::ApiLog;
pub use clock::{Clock, FixedClock, SystemClock};
