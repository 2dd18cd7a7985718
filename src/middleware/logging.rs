//! Request logging, built on the [`Trace`] middleware from [`tower_http`].
//!
//! The configured layer has a type containing closures and function items,
//! which cannot be named. `layer!()` expands to the expression instead; the
//! hooks below are `pub(crate)` only so the expansion can reach them.
//!
//! [`Trace`]: tower_http::trace::Trace

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request};
use axum::http::HeaderValue;
use axum::response::Response;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;

/// Creates a middleware that opens one span per HTTP request.
///
/// The span carries the request ID assigned by `request_id::set()`, so that
/// layer has to wrap this one.
macro_rules! layer {
	() => {
		tower_http::trace::TraceLayer::new_for_http()
			.make_span_with($crate::middleware::logging::make_span)
			.on_request(())
			.on_response($crate::middleware::logging::on_response)
			.on_failure($crate::middleware::logging::on_failure)
	};
}

pub(crate) use layer;

#[doc(hidden)]
pub(crate) fn make_span(request: &Request) -> tracing::Span
{
	let request_id = request
		.extensions()
		.get::<RequestId>()
		.map(RequestId::header_value)
		.and_then(|value| HeaderValue::to_str(value).ok())
		.unwrap_or("none");

	let client = request
		.extensions()
		.get::<ConnectInfo<SocketAddr>>()
		.map(|ConnectInfo(addr)| tracing::field::display(*addr));

	tracing::info_span! {
		target: "course_gpa_api::http",
		"request",
		request.id = request_id,
		request.client = client,
		request.method = %request.method(),
		request.uri = %request.uri(),
		response.status = tracing::field::Empty,
		latency = tracing::field::Empty,
	}
}

#[doc(hidden)]
pub(crate) fn on_response(response: &Response, latency: Duration, span: &tracing::Span)
{
	let status = response.status();

	span.record("response.status", status.as_u16())
		.record("latency", tracing::field::debug(latency));

	if status.is_client_error() {
		tracing::debug!(target: "course_gpa_api::http", %status, "rejected request");
	} else {
		tracing::info!(target: "course_gpa_api::http", %status, ?latency, "served request");
	}
}

#[doc(hidden)]
pub(crate) fn on_failure(
	failure: ServerErrorsFailureClass,
	_latency: Duration,
	_span: &tracing::Span,
)
{
	match failure {
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(target: "course_gpa_api::http", %error, "request failed");
		}
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::error!(target: "course_gpa_api::http", %status, "request failed");
		}
	}
}
