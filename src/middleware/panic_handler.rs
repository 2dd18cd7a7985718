//! This module contains a configured [`CatchPanicLayer`], which will catch
//! panics and produce a proper HTTP response from them.
//!
//! Normally, if an HTTP handler panics, the connection will simply be closed.
//! This middleware will prevent that from happening.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::{ErrorKind, ErrorResponse, IntoErrorResponse};

/// Creates a middleware layer for catching panics and turning them into
/// responses.
pub fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// A custom panic handler for [`CatchPanicLayer`].
#[derive(Debug, Clone, Copy)]
pub struct PanicHandler;

/// An error type describing that an HTTP handler panicked.
#[derive(Debug, Clone, Copy, Error)]
#[error("something unexpected happened; please report this incident")]
struct HandlerPanicked;

impl IntoErrorResponse for HandlerPanicked
{
	fn kind(&self) -> ErrorKind
	{
		ErrorKind::Internal
	}
}

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	#[tracing::instrument(target = "course_gpa_api::http", name = "panic_handler", skip_all)]
	fn response_for_panic(&mut self, error: Box<dyn Any + Send + 'static>) -> Response
	{
		let error = error
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| error.downcast_ref::<String>().map(String::as_str));

		tracing::error!(?error, "handler panicked");

		ErrorResponse::from(HandlerPanicked).into_response()
	}
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use axum::http::{Request, StatusCode};
	use axum::routing;
	use axum::Router;
	use tower::ServiceExt;

	use super::*;
	use crate::testing;

	#[tokio::test]
	async fn panics_become_500s() -> color_eyre::Result<()>
	{
		let router = Router::new()
			.route("/", routing::get(|| async { #[allow(unreachable_code)] let unit: () = panic!("whoops"); unit }))
			.layer(layer());

		let req = Request::builder().uri("/").body(Body::empty())?;
		let res = router.oneshot(req).await?;

		testing::assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body["status"], 500);

		Ok(())
	}
}
