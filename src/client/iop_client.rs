//! Client for executing AliExpress Open Platform API calls.
//!
//! This module provides the [`IopClient`] type, which assembles the system
//! parameters for a call, signs the merged parameter set, performs exactly
//! one HTTP exchange, and maps the JSON body into an
//! [`IopResponse`](crate::IopResponse).

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::auth::sign;
use crate::client::errors::ExecuteError;
use crate::client::request::{HttpMethod, IopRequest};
use crate::client::response::IopResponse;
use crate::config::{IopConfig, LogLevel};
use crate::logging::{ApiLog, Clock, SystemClock};

/// Fixed SDK identifier sent as the `partner_id` system parameter and
/// recorded in every diagnostic log line.
pub const SDK_VERSION: &str = "aliexpress-api-sdk-rust-20230701";

/// Client for the AliExpress Open Platform gateway.
///
/// The client handles:
/// - System-parameter assembly (key, timestamp, signing method, operation)
/// - Request signing over the merged parameter set
/// - Transport selection (GET, query-string POST, or multipart POST)
/// - Response mapping into [`IopResponse`]
/// - Diagnostic logging of failed (and optionally successful) calls
///
/// One `execute` call performs exactly one network exchange; there are no
/// retries. Application-level failures (a non-`"0"` result code) come back
/// as a normal response; only transport-tier failures are errors.
///
/// # Thread Safety
///
/// `IopClient` is `Send + Sync`, making it safe to share across async tasks.
/// Concurrent calls are independent except for appends to the shared
/// diagnostic log, which are atomic per line.
///
/// # Example
///
/// ```rust,ignore
/// use aliexpress_api::{AppKey, AppSecret, IopClient, IopConfig, IopRequest, ServerUrl};
///
/// let config = IopConfig::builder()
///     .server_url(ServerUrl::new("https://api-sg.aliexpress.com/sync")?)
///     .app_key(AppKey::new("33505222")?)
///     .app_secret(AppSecret::new("app-secret")?)
///     .build()?;
///
/// let client = IopClient::new(config);
///
/// let request = IopRequest::builder("aliexpress.logistics.redefining.getlogisticsselleraddresses")
///     .param("seller_address_query", "pickup")
///     .build();
///
/// let response = client.execute(request, Some("access-token")).await?;
/// if response.is_success() {
///     println!("{}", response.body);
/// }
/// ```
#[derive(Debug)]
pub struct IopClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    config: IopConfig,
    log: ApiLog,
    clock: Arc<dyn Clock>,
}

// Verify IopClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IopClient>();
};

impl IopClient {
    /// Creates a client with the system clock and the default per-user log
    /// directory.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: IopConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let log = ApiLog::new(ApiLog::default_dir(), Arc::clone(&clock));
        Self::with_diagnostics(config, log, clock)
    }

    /// Creates a client with an injected diagnostic log and clock.
    ///
    /// The clock drives the `timestamp` system parameter; the log receives
    /// one line per recorded call. Injecting both makes `execute` fully
    /// deterministic under test.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_diagnostics(config: IopConfig, log: ApiLog, clock: Arc<dyn Clock>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            log,
            clock,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &IopConfig {
        &self.config
    }

    /// Executes an API call and returns the mapped response.
    ///
    /// System parameters are merged with the request parameters (on key
    /// collision the request value wins), the merged set is signed, and one
    /// HTTP exchange is performed:
    ///
    /// - any file parameter present: multipart POST, regardless of the
    ///   declared method
    /// - declared method POST: POST with the parameters as URL query, empty
    ///   body
    /// - otherwise: GET with the parameters as URL query
    ///
    /// A completed exchange with a JSON body always returns `Ok`, whatever
    /// code the gateway reports; inspect
    /// [`is_success`](IopResponse::is_success) on the response.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] for transport-tier failures only: connection
    /// errors, timeouts, or a body that is not valid JSON. The failure is
    /// recorded in the diagnostic log with the `HTTP_ERROR` marker and
    /// returned unchanged; nothing is retried.
    pub async fn execute(
        &self,
        request: IopRequest,
        access_token: Option<&str>,
    ) -> Result<IopResponse, ExecuteError> {
        let params = self.signed_params(&request, access_token);
        let request_url = self.diagnostic_url(&params);
        let app_key = self.config.app_key().as_ref().to_string();

        tracing::debug!(
            "Dispatching {} to {}",
            request.api_name,
            self.config.server_url().as_ref()
        );

        let IopRequest {
            api_name,
            http_method,
            file_params,
            ..
        } = request;

        match self.dispatch(http_method, file_params, &params).await {
            Ok(body) => {
                let response = IopResponse::from_body(body);
                match response.code.as_deref() {
                    Some(code) if code != "0" => {
                        tracing::warn!("Gateway rejected {api_name}: code={code}");
                        self.log.append(
                            &app_key,
                            SDK_VERSION,
                            &request_url,
                            code,
                            response.message.as_deref().unwrap_or(""),
                        );
                    }
                    _ => {
                        if matches!(self.config.log_level(), LogLevel::Debug | LogLevel::Info) {
                            self.log.append(&app_key, SDK_VERSION, &request_url, "", "");
                        }
                    }
                }
                Ok(response)
            }
            Err(e) => {
                let detail = match &e {
                    ExecuteError::Network(inner) => inner.to_string(),
                    ExecuteError::MalformedBody(inner) => inner.to_string(),
                };
                self.log
                    .append(&app_key, SDK_VERSION, &request_url, "HTTP_ERROR", &detail);
                Err(e)
            }
        }
    }

    /// Performs the single HTTP exchange and parses the body as JSON.
    async fn dispatch(
        &self,
        method: HttpMethod,
        file_params: BTreeMap<String, Vec<u8>>,
        params: &BTreeMap<String, String>,
    ) -> Result<Value, ExecuteError> {
        let url = self.config.server_url().as_ref();

        let builder = if file_params.is_empty() {
            match method {
                HttpMethod::Post => self.client.post(url).query(params),
                HttpMethod::Get => self.client.get(url).query(params),
            }
        } else {
            // File uploads always go out as multipart POST: every merged
            // parameter as a text field, every file parameter as a byte part.
            let mut form = reqwest::multipart::Form::new();
            for (key, value) in params {
                form = form.text(key.clone(), value.clone());
            }
            for (key, bytes) in file_params {
                form = form.part(key, reqwest::multipart::Part::bytes(bytes));
            }
            self.client.post(url).multipart(form)
        };

        let body_text = builder.send().await?.text().await?;
        let body = serde_json::from_str(&body_text)?;
        Ok(body)
    }

    /// Builds the fully signed parameter set for a call.
    ///
    /// System parameters first, then the request parameters overlaid (on key
    /// collision the request value wins), then the signature over the merged
    /// set, inserted last under `sign`.
    fn signed_params(
        &self,
        request: &IopRequest,
        access_token: Option<&str>,
    ) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(
            "app_key".to_string(),
            self.config.app_key().as_ref().to_string(),
        );
        params.insert("sign_method".to_string(), "sha256".to_string());
        params.insert(
            "timestamp".to_string(),
            self.clock.now().timestamp_millis().to_string(),
        );
        params.insert("partner_id".to_string(), SDK_VERSION.to_string());
        params.insert("method".to_string(), request.api_name.clone());
        params.insert("simplify".to_string(), request.simplify.to_string());
        params.insert("format".to_string(), request.format.clone());

        if self.config.log_level() == LogLevel::Debug {
            params.insert("debug".to_string(), "true".to_string());
        }
        if let Some(token) = access_token.filter(|token| !token.is_empty()) {
            params.insert("session".to_string(), token.to_string());
        }

        for (key, value) in &request.api_params {
            params.insert(key.clone(), value.to_string());
        }

        let signature = sign(self.config.app_secret().as_ref(), &request.api_name, &params);
        params.insert("sign".to_string(), signature);
        params
    }

    /// Rebuilds the request URL recorded in the diagnostic log.
    ///
    /// Parameters are joined raw, without percent-encoding, keeping the log
    /// line format stable for existing consumers. The transmitted request
    /// uses proper query encoding.
    fn diagnostic_url(&self, params: &BTreeMap<String, String>) -> String {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("{}?{}", self.config.server_url().as_ref(), query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppKey, AppSecret, ServerUrl};
    use crate::logging::FixedClock;
    use chrono::{TimeZone, Utc};

    fn test_client(log_level: LogLevel) -> (IopClient, tempfile::TempDir) {
        let config = IopConfig::builder()
            .server_url(ServerUrl::new("https://api-sg.aliexpress.com/sync").unwrap())
            .app_key(AppKey::new("33505222").unwrap())
            .app_secret(AppSecret::new("secret123").unwrap())
            .log_level(log_level)
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2023, 7, 22, 4, 26, 40).unwrap(),
        ));
        let log = ApiLog::new(dir.path(), Arc::clone(&clock));
        (IopClient::with_diagnostics(config, log, clock), dir)
    }

    #[test]
    fn test_system_parameters_are_assembled() {
        let (client, _dir) = test_client(LogLevel::Error);
        let request = IopRequest::builder("aliexpress.solution.order.get").build();

        let params = client.signed_params(&request, None);

        assert_eq!(params["app_key"], "33505222");
        assert_eq!(params["sign_method"], "sha256");
        assert_eq!(params["timestamp"], "1690000000000");
        assert_eq!(params["partner_id"], SDK_VERSION);
        assert_eq!(params["method"], "aliexpress.solution.order.get");
        assert_eq!(params["simplify"], "false");
        assert_eq!(params["format"], "json");
        assert!(!params.contains_key("debug"));
        assert!(!params.contains_key("session"));
    }

    #[test]
    fn test_signature_covers_everything_but_itself() {
        let (client, _dir) = test_client(LogLevel::Error);
        let request = IopRequest::builder("aliexpress.solution.order.get")
            .param("order_id", 8_372_651_i64)
            .build();

        let mut params = client.signed_params(&request, Some("token-1"));
        let signature = params.remove("sign").unwrap();

        assert_eq!(signature.len(), 64);
        assert_eq!(
            signature,
            sign("secret123", "aliexpress.solution.order.get", &params)
        );
    }

    #[test]
    fn test_request_parameters_win_on_key_collision() {
        let (client, _dir) = test_client(LogLevel::Error);
        let request = IopRequest::builder("aliexpress.solution.order.get")
            .param("timestamp", "1")
            .param("format", "xml")
            .build();

        let params = client.signed_params(&request, None);

        assert_eq!(params["timestamp"], "1");
        assert_eq!(params["format"], "xml");
    }

    #[test]
    fn test_debug_level_adds_debug_parameter() {
        let (client, _dir) = test_client(LogLevel::Debug);
        let request = IopRequest::builder("aliexpress.solution.order.get").build();

        let params = client.signed_params(&request, None);
        assert_eq!(params["debug"], "true");
    }

    #[test]
    fn test_info_level_does_not_add_debug_parameter() {
        let (client, _dir) = test_client(LogLevel::Info);
        let request = IopRequest::builder("aliexpress.solution.order.get").build();

        let params = client.signed_params(&request, None);
        assert!(!params.contains_key("debug"));
    }

    #[test]
    fn test_access_token_becomes_session_parameter() {
        let (client, _dir) = test_client(LogLevel::Error);
        let request = IopRequest::builder("aliexpress.solution.order.get").build();

        let params = client.signed_params(&request, Some("access-token"));
        assert_eq!(params["session"], "access-token");
    }

    #[test]
    fn test_empty_access_token_is_ignored() {
        let (client, _dir) = test_client(LogLevel::Error);
        let request = IopRequest::builder("aliexpress.solution.order.get").build();

        let params = client.signed_params(&request, Some(""));
        assert!(!params.contains_key("session"));
    }

    #[test]
    fn test_diagnostic_url_is_raw_and_sorted() {
        let (client, _dir) = test_client(LogLevel::Error);
        let request = IopRequest::builder("op.name")
            .param("b", "2 2")
            .param("a", "1")
            .build();

        let params = client.signed_params(&request, None);
        let url = client.diagnostic_url(&params);

        assert!(url.starts_with("https://api-sg.aliexpress.com/sync?a=1&"));
        // Raw values, no percent-encoding.
        assert!(url.contains("b=2 2"));
        assert!(url.contains(&format!("sign={}", params["sign"])));
    }
}
