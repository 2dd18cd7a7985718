//! Request IDs.
//!
//! Every request gets a UUIDv7 in its `x-request-id` header, unless the
//! client already sent one. The ID is echoed back on the response and
//! recorded on the request's tracing span.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{
	MakeRequestId,
	PropagateRequestIdLayer,
	RequestId,
	SetRequestIdLayer,
};
use uuid::Uuid;

/// Creates a layer that assigns a request ID to every incoming request.
pub fn set() -> SetRequestIdLayer<MakeUuidRequestId>
{
	SetRequestIdLayer::x_request_id(MakeUuidRequestId)
}

/// Creates a layer that copies the request ID onto the response.
pub fn propagate() -> PropagateRequestIdLayer
{
	PropagateRequestIdLayer::x_request_id()
}

/// An implementation of [`MakeRequestId`] that generates UUIDv7s.
#[derive(Debug, Clone, Copy)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId
{
	fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId>
	{
		Uuid::now_v7()
			.hyphenated()
			.encode_lower(&mut Uuid::encode_buffer())
			.parse::<HeaderValue>()
			.map(RequestId::from)
			.ok()
	}
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use axum::http::StatusCode;
	use axum::{routing, Router};
	use tower::ServiceExt;

	use super::*;
	use crate::testing;

	fn router() -> Router
	{
		Router::new()
			.route("/", routing::get(|| async { StatusCode::OK }))
			.layer(propagate())
			.layer(set())
	}

	#[tokio::test]
	async fn generates_uuids() -> color_eyre::Result<()>
	{
		let req = Request::builder().uri("/").body(Body::empty())?;
		let res = router().oneshot(req).await?;
		let request_id = res
			.headers()
			.get("x-request-id")
			.map(HeaderValue::to_str)
			.transpose()?;

		testing::assert!(
			request_id.is_some_and(|id| id.parse::<Uuid>().is_ok()),
			"response carries a generated uuid"
		);

		Ok(())
	}

	#[tokio::test]
	async fn keeps_client_ids() -> color_eyre::Result<()>
	{
		let req = Request::builder()
			.uri("/")
			.header("x-request-id", "my-request")
			.body(Body::empty())?;

		let res = router().oneshot(req).await?;

		testing::assert_eq!(
			res.headers().get("x-request-id"),
			Some(&HeaderValue::from_static("my-request")),
		);

		Ok(())
	}
}
