//! This module contains the [`ErrorKind`] enum.
//!
//! It represents an exhaustive list of all the error classes the API might
//! return.

use axum::http::StatusCode;

/// The classification of an error.
///
/// This determines the HTTP status code of the error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind
{
	/// A validation precondition failed, e.g. a course name was empty.
	InvalidInput,

	/// A lookup by id or name found no match.
	NotFound,

	/// The request body could not be parsed.
	InvalidRequestBody,

	/// A path parameter could not be parsed.
	InvalidPathParameter,

	/// A required request header was missing.
	MissingHeader,

	/// Something went wrong on our end.
	Internal,
}

impl ErrorKind
{
	/// Returns the HTTP status code for this kind of error.
	pub const fn status(self) -> StatusCode
	{
		match self {
			Self::InvalidInput
			| Self::InvalidRequestBody
			| Self::InvalidPathParameter
			| Self::MissingHeader => StatusCode::BAD_REQUEST,
			Self::NotFound => StatusCode::NOT_FOUND,
			Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
