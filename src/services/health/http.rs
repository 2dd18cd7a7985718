//! HTTP handlers for this service.

use axum::extract::State;
use axum::{routing, Router};

use super::HealthService;

impl From<HealthService> for Router
{
	fn from(svc: HealthService) -> Self
	{
		Router::new().route("/", routing::get(get)).with_state(svc)
	}
}

/// Check whether the API is up.
#[tracing::instrument]
#[utoipa::path(get, path = "/", tag = "Health", responses(
  (status = 200, description = "The API is healthy.", body = str),
))]
pub(crate) async fn get(State(svc): State<HealthService>) -> &'static str
{
	svc.status().await
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use axum::http::{Request, StatusCode};
	use tower::ServiceExt;

	use super::*;
	use crate::testing;

	#[tokio::test]
	async fn responds_ok() -> color_eyre::Result<()>
	{
		let req = Request::builder().uri("/").body(Body::empty())?;
		let res = Router::from(HealthService::new()).oneshot(req).await?;

		testing::assert_eq!(res.status(), StatusCode::OK);

		let body = axum::body::to_bytes(res.into_body(), usize::MAX).await?;

		testing::assert_eq!(&body[..], b"course-gpa-api is running");

		Ok(())
	}
}
