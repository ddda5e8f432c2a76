//! Configuration types for the AliExpress API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with the AliExpress Open
//! Platform gateway.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`IopConfig`]: The main configuration struct holding all SDK settings
//! - [`IopConfigBuilder`]: A builder for constructing [`IopConfig`] instances
//! - [`AppKey`]: A validated app key newtype
//! - [`AppSecret`]: A validated app secret newtype with masked debug output
//! - [`ServerUrl`]: A validated API gateway URL
//! - [`LogLevel`]: The diagnostic log verbosity
//!
//! # Example
//!
//! ```rust
//! use aliexpress_api::{AppKey, AppSecret, IopConfig, LogLevel, ServerUrl};
//!
//! let config = IopConfig::builder()
//!     .server_url(ServerUrl::new("https://api-sg.aliexpress.com/sync").unwrap())
//!     .app_key(AppKey::new("33505222").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .log_level(LogLevel::Info)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AppKey, AppSecret, ServerUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Verbosity of the diagnostic log file.
///
/// Controls two behaviors: whether successful calls are recorded in the
/// diagnostic log, and whether the `debug` system parameter is sent to the
/// gateway.
///
/// - `Error`: only failed calls are recorded (platform failure codes and
///   transport errors).
/// - `Info`: successful calls are also recorded as access lines with empty
///   code/message fields.
/// - `Debug`: like `Info`, and the `debug=true` system parameter is added
///   to every request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Record every call and request server-side debug output.
    Debug,
    /// Record every call.
    Info,
    /// Record failed calls only.
    #[default]
    Error,
}

/// Configuration for the AliExpress API SDK.
///
/// This struct holds all configuration needed to talk to the gateway:
/// the endpoint URL, application credentials, request timeout, and the
/// diagnostic log verbosity.
///
/// # Thread Safety
///
/// `IopConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. Built configurations are immutable.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::{AppKey, AppSecret, IopConfig, ServerUrl};
///
/// let config = IopConfig::builder()
///     .server_url(ServerUrl::new("https://api-sg.aliexpress.com/sync").unwrap())
///     .app_key(AppKey::new("33505222").unwrap())
///     .app_secret(AppSecret::new("my-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.app_key().as_ref(), "33505222");
/// ```
#[derive(Clone, Debug)]
pub struct IopConfig {
    server_url: ServerUrl,
    app_key: AppKey,
    app_secret: AppSecret,
    timeout: Duration,
    log_level: LogLevel,
}

impl IopConfig {
    /// Creates a new builder for constructing an `IopConfig`.
    #[must_use]
    pub fn builder() -> IopConfigBuilder {
        IopConfigBuilder::new()
    }

    /// Returns the API gateway URL.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Returns the app key.
    #[must_use]
    pub const fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// Returns the app secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the diagnostic log verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }
}

// Verify IopConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IopConfig>();
};

/// Builder for constructing [`IopConfig`] instances.
///
/// Required fields are `server_url`, `app_key`, and `app_secret`. All other
/// fields have defaults.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `log_level`: [`LogLevel::Error`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use aliexpress_api::{AppKey, AppSecret, IopConfig, LogLevel, ServerUrl};
///
/// let config = IopConfig::builder()
///     .server_url(ServerUrl::new("https://api-sg.aliexpress.com/sync").unwrap())
///     .app_key(AppKey::new("33505222").unwrap())
///     .app_secret(AppSecret::new("my-secret").unwrap())
///     .timeout(Duration::from_secs(10))
///     .log_level(LogLevel::Debug)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct IopConfigBuilder {
    server_url: Option<ServerUrl>,
    app_key: Option<AppKey>,
    app_secret: Option<AppSecret>,
    timeout: Option<Duration>,
    log_level: Option<LogLevel>,
}

impl IopConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API gateway URL (required).
    #[must_use]
    pub fn server_url(mut self, url: ServerUrl) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Sets the app key (required).
    #[must_use]
    pub fn app_key(mut self, key: AppKey) -> Self {
        self.app_key = Some(key);
        self
    }

    /// Sets the app secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Sets the request timeout.
    ///
    /// Exceeding the timeout surfaces as a transport error from
    /// [`execute`](crate::IopClient::execute).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the diagnostic log verbosity.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Builds the [`IopConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `server_url`,
    /// `app_key`, or `app_secret` are not set.
    pub fn build(self) -> Result<IopConfig, ConfigError> {
        let server_url = self.server_url.ok_or(ConfigError::MissingRequiredField {
            field: "server_url",
        })?;
        let app_key = self
            .app_key
            .ok_or(ConfigError::MissingRequiredField { field: "app_key" })?;
        let app_secret = self.app_secret.ok_or(ConfigError::MissingRequiredField {
            field: "app_secret",
        })?;

        Ok(IopConfig {
            server_url,
            app_key,
            app_secret,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            log_level: self.log_level.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_url() -> ServerUrl {
        ServerUrl::new("https://api-sg.aliexpress.com/sync").unwrap()
    }

    #[test]
    fn test_builder_requires_server_url() {
        let result = IopConfigBuilder::new()
            .app_key(AppKey::new("key").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "server_url"
            })
        ));
    }

    #[test]
    fn test_builder_requires_app_key() {
        let result = IopConfigBuilder::new()
            .server_url(test_url())
            .app_secret(AppSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "app_key" })
        ));
    }

    #[test]
    fn test_builder_requires_app_secret() {
        let result = IopConfigBuilder::new()
            .server_url(test_url())
            .app_key(AppKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "app_secret" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = IopConfig::builder()
            .server_url(test_url())
            .app_key(AppKey::new("key").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = IopConfig::builder()
            .server_url(test_url())
            .app_key(AppKey::new("key").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .timeout(Duration::from_secs(5))
            .log_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IopConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = IopConfig::builder()
            .server_url(test_url())
            .app_key(AppKey::new("key").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.app_key(), config.app_key());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("IopConfig"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_log_level_default_is_error() {
        assert_eq!(LogLevel::default(), LogLevel::Error);
    }
}
