//! This module contains the [`Json`] extractor, a wrapper around [`axum::Json`]
//! with a custom error response.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http::{ErrorKind, ErrorResponse, IntoErrorResponse};

/// An extractor for JSON request bodies.
///
/// This wraps [`axum::Json`] exactly, but produces different error responses.
/// It is also used as a response type.
#[derive(Debug)]
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
	S: Send + Sync,
	T: DeserializeOwned,
{
	type Rejection = JsonRejection;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::MissingContentType);
		}

		let bytes = Bytes::from_request(req, state)
			.await
			.map_err(JsonRejection::Bytes)?;

		serde_json::from_slice(&bytes).map(Self).map_err(Into::into)
	}
}

impl<T> IntoResponse for Json<T>
where
	axum::Json<T>: IntoResponse,
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}

/// Rejection for the [`Json`] extractor.
#[derive(Debug, Error)]
pub enum JsonRejection
{
	/// The request did not declare a JSON body.
	#[error("expected request with `Content-Type: application/json`")]
	MissingContentType,

	/// The body could not be buffered.
	#[error(transparent)]
	Bytes(BytesRejection),

	/// The body was not valid JSON for the expected type.
	#[error("invalid request body: {0}")]
	Deserialize(#[from] serde_json::Error),
}

impl IntoResponse for JsonRejection
{
	fn into_response(self) -> Response
	{
		ErrorResponse::from(self).into_response()
	}
}

impl IntoErrorResponse for JsonRejection
{
	fn kind(&self) -> ErrorKind
	{
		match self {
			Self::MissingContentType => ErrorKind::MissingHeader,
			Self::Bytes(_) | Self::Deserialize(_) => ErrorKind::InvalidRequestBody,
		}
	}
}

/// Checks if the given `headers` contain a JSON-like Content-Type.
fn has_json_content_type(headers: &HeaderMap) -> bool
{
	let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		return false;
	};

	let Ok(mime) = content_type.parse::<mime::Mime>() else {
		return false;
	};

	mime.type_() == "application"
		&& (mime.subtype() == "json" || mime.suffix().is_some_and(|name| name == "json"))
}
