//! CORS middlewares.

use axum::http::Method;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer that allows requests from any origin using any of the
/// methods the course routes respond to.
pub fn permissive() -> CorsLayer
{
	CorsLayer::permissive().allow_methods([
		Method::OPTIONS,
		Method::GET,
		Method::POST,
		Method::PUT,
		Method::DELETE,
	])
}
