//! This module contains the [`IntoErrorResponse`] trait.
//!
//! It defines the contract for how an error type can be turned into an HTTP
//! error response.

use std::convert;

use super::ErrorKind;

/// A trait for creating [`ErrorResponse`]s from error types.
///
/// The error's [`Display`] implementation becomes the response's `message`.
///
/// [`ErrorResponse`]: super::ErrorResponse
/// [`Display`]: std::fmt::Display
pub trait IntoErrorResponse: std::error::Error
{
	/// Returns the classification of this error.
	fn kind(&self) -> ErrorKind;
}

impl IntoErrorResponse for convert::Infallible
{
	fn kind(&self) -> ErrorKind
	{
		match *self {}
	}
}
