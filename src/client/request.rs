//! Request types for the AliExpress API SDK.
//!
//! This module provides the [`IopRequest`] type and its builder for
//! describing a single gateway call: the operation name, an HTTP method
//! hint, named parameters, optional binary file parameters, and the two
//! response-shaping flags (`simplify`, `format`).

use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods supported by the gateway.
///
/// The method is a hint: a request carrying file parameters is always sent
/// as a multipart POST regardless of the declared method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method.
    Get,
    /// HTTP POST method (the default).
    #[default]
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A request parameter value: text or a number.
///
/// The gateway accepts string and numeric parameters. The textual form is
/// fixed once here and used identically for signing and transmission:
/// text is rendered verbatim, numbers in their canonical decimal form with
/// no locale grouping, booleans as `"true"`/`"false"`.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::ParamValue;
///
/// assert_eq!(ParamValue::from("pickup").to_string(), "pickup");
/// assert_eq!(ParamValue::from(42_i64).to_string(), "42");
/// assert_eq!(ParamValue::from(1.5).to_string(), "1.5");
/// assert_eq!(ParamValue::from(true).to_string(), "true");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A text value, rendered verbatim.
    Text(String),
    /// A numeric value, rendered without locale grouping.
    Number(serde_json::Number),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON number form; fall back to their
        // display form.
        serde_json::Number::from_f64(value)
            .map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Text(if value { "true" } else { "false" }.to_string())
    }
}

/// A single API call to be executed by [`IopClient`](crate::IopClient).
///
/// Use [`IopRequest::builder`] to construct requests. A request is read
/// once by `execute` and then discarded; it is never mutated mid-call.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::{HttpMethod, IopRequest};
///
/// // GET request with one parameter
/// let request = IopRequest::builder("aliexpress.logistics.redefining.getlogisticsselleraddresses")
///     .method(HttpMethod::Get)
///     .param("seller_address_query", "pickup")
///     .build();
///
/// // File upload; always sent as multipart POST
/// let upload = IopRequest::builder("aliexpress.photobank.redefining.uploadimageforsdk")
///     .param("image_file_name", "demo.jpg")
///     .file_param("image_bytes", vec![0xff, 0xd8, 0xff])
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct IopRequest {
    /// The operation name or path the request targets.
    pub api_name: String,
    /// The HTTP method hint (default POST).
    pub http_method: HttpMethod,
    /// Named string/number parameters.
    pub api_params: BTreeMap<String, ParamValue>,
    /// Named binary file parameters.
    pub file_params: BTreeMap<String, Vec<u8>>,
    /// Response-shaping hint; sent as `simplify=true`/`false`.
    pub simplify: bool,
    /// Response format; sent as `format` (default `"json"`).
    pub format: String,
}

impl IopRequest {
    /// Creates a new builder for the given operation.
    #[must_use]
    pub fn builder(api_name: impl Into<String>) -> IopRequestBuilder {
        IopRequestBuilder::new(api_name)
    }

    /// Returns `true` if the request carries any file parameters.
    ///
    /// Such requests are always sent as multipart POST.
    #[must_use]
    pub fn has_files(&self) -> bool {
        !self.file_params.is_empty()
    }
}

/// Builder for constructing [`IopRequest`] instances.
#[derive(Debug)]
pub struct IopRequestBuilder {
    api_name: String,
    http_method: HttpMethod,
    api_params: BTreeMap<String, ParamValue>,
    file_params: BTreeMap<String, Vec<u8>>,
    simplify: bool,
    format: String,
}

impl IopRequestBuilder {
    fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            http_method: HttpMethod::Post,
            api_params: BTreeMap::new(),
            file_params: BTreeMap::new(),
            simplify: false,
            format: "json".to_string(),
        }
    }

    /// Sets the HTTP method hint.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.http_method = method;
        self
    }

    /// Adds a named parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.api_params.insert(key.into(), value.into());
        self
    }

    /// Adds a named binary file parameter.
    #[must_use]
    pub fn file_param(mut self, key: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.file_params.insert(key.into(), content.into());
        self
    }

    /// Requests the simplified response shape (`simplify=true`).
    #[must_use]
    pub const fn simplify(mut self) -> Self {
        self.simplify = true;
        self
    }

    /// Sets the response format (default `"json"`).
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Builds the [`IopRequest`].
    #[must_use]
    pub fn build(self) -> IopRequest {
        IopRequest {
            api_name: self.api_name,
            http_method: self.http_method,
            api_params: self.api_params,
            file_params: self.file_params,
            simplify: self.simplify,
            format: self.format,
        }
    }
}
