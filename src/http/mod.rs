//! HTTP plumbing shared by all services.
//!
//! This contains the uniform [`ErrorResponse`] type and wrappers around
//! [`axum`]'s extractors that reject requests with it.

pub mod error_response;
pub use error_response::{ErrorKind, ErrorResponse, IntoErrorResponse};

pub mod extract;
