//! Error types for request execution.
//!
//! Only transport-tier failures surface as errors: the connection failed,
//! the request timed out, or the body could not be parsed as JSON.
//! Application-level failures (a non-`"0"` result code) are reported through
//! a normally returned [`IopResponse`](crate::IopResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use aliexpress_api::ExecuteError;
//!
//! match client.execute(request, None).await {
//!     Ok(response) if response.is_success() => { /* use response.body */ }
//!     Ok(response) => {
//!         println!("gateway rejected the call: {}", response);
//!     }
//!     Err(ExecuteError::Network(e)) => {
//!         println!("transport failure: {e}");
//!     }
//!     Err(ExecuteError::MalformedBody(e)) => {
//!         println!("gateway returned non-JSON: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors raised by [`IopClient::execute`](crate::IopClient::execute).
///
/// Both variants are logged to the diagnostic file with the `HTTP_ERROR`
/// marker before being returned; the underlying error is preserved as the
/// source and is never swallowed or retried.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Connection failure, DNS failure, or timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The exchange completed but the body was not valid JSON.
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_body_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = ExecuteError::from(parse_err);
        assert!(error.to_string().starts_with("Malformed response body:"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let error: &dyn std::error::Error = &ExecuteError::from(parse_err);
        assert!(error.source().is_some());
    }
}
