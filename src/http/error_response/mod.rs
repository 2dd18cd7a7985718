//! Uniform HTTP error responses.
//!
//! Every error that reaches a client is turned into an [`ErrorResponse`],
//! which serializes as
//!
//! ```json
//! { "status": 404, "message": "course not found with id: 7", "timestamp": 1718000000000 }
//! ```
//!
//! It can be created from any error type that implements
//! [`IntoErrorResponse`], and implements [`IntoResponse`] itself.

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use serde::Serialize;

mod error_kind;
pub use error_kind::ErrorKind;

mod into_error_response;
pub use into_error_response::IntoErrorResponse;

/// The body of every error response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[schema(title = "ApiErrorResponse")]
pub struct ErrorResponse
{
	/// The classification of the error.
	#[serde(skip)]
	kind: ErrorKind,

	/// The HTTP status code of the response.
	#[schema(example = 404)]
	status: u16,

	/// Short, human-readable, error message describing this particular problem.
	#[schema(example = "course not found with name: Algebra")]
	message: String,

	/// When the error occurred, in milliseconds since the Unix epoch.
	timestamp: i64,
}

impl<E> From<E> for ErrorResponse
where
	E: IntoErrorResponse,
{
	#[track_caller]
	fn from(error: E) -> Self
	{
		tracing::debug!(loc = %Location::caller(), ?error, "creating error response");

		let kind = error.kind();
		let status = kind.status().as_u16();
		let message = error.to_string();
		let timestamp = chrono::Utc::now().timestamp_millis();

		Self { kind, status, message, timestamp }
	}
}

impl IntoResponse for ErrorResponse
{
	fn into_response(self) -> Response
	{
		let status = self.kind.status();

		if status.is_server_error() {
			tracing::error!(message = %self.message, "internal server error occurred");
		}

		(status, crate::http::extract::Json(self)).into_response()
	}
}

#[cfg(test)]
mod tests
{
	use axum::http::StatusCode;
	use thiserror::Error;

	use super::*;

	#[derive(Debug, Error)]
	#[error("course not found with id: 7")]
	struct Missing;

	impl IntoErrorResponse for Missing
	{
		fn kind(&self) -> ErrorKind
		{
			ErrorKind::NotFound
		}
	}

	#[tokio::test]
	async fn serializes_status_message_and_timestamp() -> color_eyre::Result<()>
	{
		let before = chrono::Utc::now().timestamp_millis();
		let res = ErrorResponse::from(Missing).into_response();

		crate::testing::assert_eq!(res.status(), StatusCode::NOT_FOUND);

		let body = crate::testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		crate::testing::assert_eq!(body["status"], 404);
		crate::testing::assert_eq!(body["message"], "course not found with id: 7");
		crate::testing::assert!(body["timestamp"].as_i64().is_some_and(|ts| ts >= before));
		crate::testing::assert!(body.get("kind").is_none(), "kind is not part of the body");

		Ok(())
	}
}
