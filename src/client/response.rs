//! Response types for the AliExpress API SDK.
//!
//! This module provides the [`IopResponse`] type, the result of a completed
//! gateway exchange. The gateway reports call outcome through well-known
//! top-level JSON fields; everything else is preserved in the raw body.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A parsed response from the gateway.
///
/// The four well-known fields are copied out of the JSON body when present;
/// absent fields stay `None`. The full parsed body is always available in
/// [`body`](Self::body).
///
/// A `code` of `"0"` signifies success; anything else, including an absent
/// code, signifies failure. Application-level failures are *not* errors:
/// callers inspect [`is_success`](Self::is_success) or
/// [`code`](Self::code) on a normally returned response.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use aliexpress_api::IopResponse;
///
/// let response = IopResponse::from_body(json!({
///     "code": "0",
///     "type": "ISP",
///     "request_id": "abc123"
/// }));
///
/// assert!(response.is_success());
/// assert_eq!(response.kind.as_deref(), Some("ISP"));
/// assert_eq!(response.request_id.as_deref(), Some("abc123"));
/// assert!(response.message.is_none());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct IopResponse {
    /// The server-reported response category (the body's `type` field).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The result code; `"0"` signifies success.
    pub code: Option<String>,
    /// The human-readable message accompanying a failure code.
    pub message: Option<String>,
    /// The gateway-assigned request identifier.
    pub request_id: Option<String>,
    /// The full parsed JSON body.
    pub body: Value,
}

impl IopResponse {
    /// Builds a response from a parsed JSON body.
    ///
    /// The well-known fields are accepted as JSON strings or numbers;
    /// numbers are rendered in their canonical decimal form, so a numeric
    /// `0` code still signifies success.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        Self {
            kind: field_as_string(&body, "type"),
            code: field_as_string(&body, "code"),
            message: field_as_string(&body, "message"),
            request_id: field_as_string(&body, "request_id"),
            body,
        }
    }

    /// Returns `true` if the gateway reported success (`code == "0"`).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code.as_deref() == Some("0")
    }
}

impl fmt::Display for IopResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_null = |v: &Option<String>| v.clone().unwrap_or_else(|| "null".to_string());
        write!(
            f,
            "type={} code={} message={} requestId={}",
            or_null(&self.kind),
            or_null(&self.code),
            or_null(&self.message),
            or_null(&self.request_id),
        )
    }
}

fn field_as_string(body: &Value, key: &str) -> Option<String> {
    match body.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
