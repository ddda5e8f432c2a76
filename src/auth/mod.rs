//! Request signing for the AliExpress Open Platform gateway.
//!
//! Every API call carries a `sign` parameter: an HMAC-SHA256 signature over
//! a canonical concatenation of the request parameters, keyed by the app
//! secret. This module provides the pure [`sign`] function that computes it.

mod sign;

pub use sign::sign;
