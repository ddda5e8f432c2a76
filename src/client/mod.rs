//! Request execution for the AliExpress Open Platform gateway.
//!
//! This module provides the request/response layer of the SDK: a caller
//! builds an [`IopRequest`], hands it to [`IopClient::execute`] with an
//! optional access token, and receives an [`IopResponse`] mapped from the
//! gateway's JSON body.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`IopClient`]: signs, sends, and maps a single API call
//! - [`IopRequest`]: one call's operation name, parameters, and flags
//! - [`IopResponse`]: the mapped result of a completed exchange
//! - [`HttpMethod`]: the declared method hint (GET or POST)
//! - [`ParamValue`]: a text or numeric parameter value
//! - [`ExecuteError`]: transport-tier failures
//!
//! # Example
//!
//! ```rust,ignore
//! use aliexpress_api::{AppKey, AppSecret, IopClient, IopConfig, IopRequest, ServerUrl};
//!
//! let config = IopConfig::builder()
//!     .server_url(ServerUrl::new("https://api-sg.aliexpress.com/sync")?)
//!     .app_key(AppKey::new("33505222")?)
//!     .app_secret(AppSecret::new("app-secret")?)
//!     .build()?;
//!
//! let client = IopClient::new(config);
//!
//! let request = IopRequest::builder("aliexpress.solution.product.info.get")
//!     .param("product_id", 1234567_i64)
//!     .build();
//!
//! let response = client.execute(request, Some("access-token")).await?;
//! println!("{response}");
//! ```

mod errors;
mod iop_client;
mod request;
mod response;

pub use errors::ExecuteError;
pub use iop_client::{IopClient, SDK_VERSION};
pub use request::{HttpMethod, IopRequest, IopRequestBuilder, ParamValue};
pub use response::IopResponse;
