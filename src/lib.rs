//! # AliExpress API Rust SDK
//!
//! A Rust SDK for the AliExpress Open Platform API, providing type-safe
//! configuration, HMAC-SHA256 request signing, and an async client for
//! executing gateway calls.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`IopConfig`] and [`IopConfigBuilder`]
//! - Validated newtypes for the app key, app secret, and gateway URL
//! - Deterministic request signing via [`auth::sign`]
//! - Request building with string, numeric, and binary file parameters
//! - An async client with GET, query-string POST, and multipart POST
//!   transports
//! - A per-day diagnostic log with an injectable clock for deterministic
//!   tests
//!
//! ## Quick Start
//!
//! ```rust
//! use aliexpress_api::{AppKey, AppSecret, HttpMethod, IopConfig, IopRequest, ServerUrl};
//!
//! // Create configuration using the builder pattern
//! let config = IopConfig::builder()
//!     .server_url(ServerUrl::new("https://api-sg.aliexpress.com/sync").unwrap())
//!     .app_key(AppKey::new("your-app-key").unwrap())
//!     .app_secret(AppSecret::new("your-app-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Describe a call
//! let request = IopRequest::builder("aliexpress.logistics.redefining.getlogisticsselleraddresses")
//!     .method(HttpMethod::Get)
//!     .param("seller_address_query", "pickup")
//!     .build();
//! ```
//!
//! ## Executing Calls
//!
//! ```rust,ignore
//! use aliexpress_api::IopClient;
//!
//! let client = IopClient::new(config);
//! let response = client.execute(request, Some("access-token")).await?;
//!
//! if response.is_success() {
//!     println!("{}", response.body);
//! } else {
//!     // Application-level failures come back as a normal response.
//!     eprintln!("gateway rejected the call: {response}");
//! }
//! ```
//!
//! ## File Uploads
//!
//! A request carrying any file parameter is always sent as a multipart POST,
//! regardless of its declared method:
//!
//! ```rust
//! use aliexpress_api::IopRequest;
//!
//! let upload = IopRequest::builder("aliexpress.photobank.redefining.uploadimageforsdk")
//!     .param("image_file_name", "demo.jpg")
//!     .file_param("image_bytes", std::fs::read("demo.jpg").unwrap_or_default())
//!     .build();
//! ```
//!
//! ## Error Handling
//!
//! Only transport-tier failures (connection errors, timeouts, non-JSON
//! bodies) surface as [`ExecuteError`]; they are recorded in the diagnostic
//! log with the `HTTP_ERROR` marker and returned unchanged. The gateway's
//! own failure codes are reported through [`IopResponse::is_success`] and
//! the response fields.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use client::{
    ExecuteError, HttpMethod, IopClient, IopRequest, IopRequestBuilder, IopResponse, ParamValue,
    SDK_VERSION,
};
pub use config::{AppKey, AppSecret, IopConfig, IopConfigBuilder, LogLevel, ServerUrl};
pub use error::ConfigError;
