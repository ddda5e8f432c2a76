//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated application key.
///
/// This newtype ensures the app key is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::AppKey;
///
/// let key = AppKey::new("33505222").unwrap();
/// assert_eq!(key.as_ref(), "33505222");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppKey(String);

impl AppKey {
    /// Creates a new validated app key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyAppKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for AppKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated application secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AppSecret(*****)` instead of the actual key. Note that the signature
/// derived from this secret is still written to the diagnostic log as part
/// of the reconstructed request URL; see
/// [`ApiLog`](crate::logging::ApiLog) for details.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::AppSecret;
///
/// let secret = AppSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AppSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
    /// Creates a new validated app secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyAppSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AppSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(*****)")
    }
}

/// A validated API server URL.
///
/// This newtype validates that the URL carries an http or https scheme and a
/// non-empty host. The URL is used verbatim as the request endpoint; request
/// parameters are appended as a query string or carried in a multipart body.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::ServerUrl;
///
/// let url = ServerUrl::new("https://api-sg.aliexpress.com/sync").unwrap();
/// assert_eq!(url.as_ref(), "https://api-sg.aliexpress.com/sync");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerUrl(String);

impl ServerUrl {
    /// Creates a new validated server URL.
    ///
    /// Leading and trailing whitespace is trimmed; the URL is otherwise
    /// stored as provided, including any path component.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUrl`] if the URL does not start
    /// with `http://` or `https://`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidServerUrl { url: url.clone() })?;

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
