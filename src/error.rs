//! Error types for client configuration.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use aliexpress_api::{AppKey, ConfigError};
//!
//! let result = AppKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App key cannot be empty.
    #[error("App key cannot be empty. Please provide the app key issued for your application.")]
    EmptyAppKey,

    /// App secret cannot be empty.
    #[error("App secret cannot be empty. Please provide the app secret issued for your application.")]
    EmptyAppSecret,

    /// Server URL is invalid.
    #[error("Invalid server URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api-sg.aliexpress.com/sync').")]
    InvalidServerUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
