//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI
//! specification from code. The [`Spec`] struct in this module lists out all
//! the relevant types, routes, and other metadata that will be included in the
//! spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use axum::{routing, Router};
use derive_more::Deref;
use itertools::Itertools;
use utoipa::OpenApi;

use crate::http::extract::Json;

#[derive(Debug, Clone, Deref, OpenApi)]
#[openapi(
  info(
    title = "Course GPA API",
    description = "Manage courses and compute their GPA score.",
    license(name = "MIT"),
  ),
  paths(
    crate::services::health::http::get,
    crate::services::courses::http::get_many,
    crate::services::courses::http::get_single,
    crate::services::courses::http::create,
    crate::services::courses::http::update,
    crate::services::courses::http::delete,
  ),
  components(
    schemas(
      crate::http::ErrorResponse,

      crate::services::courses::Course,
      crate::services::courses::CourseID,
      crate::services::courses::Credit,
      crate::services::courses::Grade,
      crate::services::courses::NewCourse,
      crate::services::courses::CourseResponse,
    ),
  ),
)]
#[allow(missing_docs)]
pub struct Spec(utoipa::openapi::OpenApi);

impl Spec
{
	/// The path the JSON document is served at.
	pub const JSON_PATH: &'static str = "/docs/open-api.json";

	/// Creates a new [`Spec`].
	pub fn new() -> Self
	{
		Self(Self::openapi())
	}

	/// Returns an iterator over the registered API routes and their allowed
	/// HTTP methods.
	pub fn routes(&self) -> impl Iterator<Item = (&str, String)>
	{
		self.paths.paths.iter().map(|(path, handler)| {
			let methods = handler
				.operations
				.keys()
				.map(|method| format!("{method:?}").to_uppercase())
				.join(", ");

			(path.as_str(), methods)
		})
	}

	/// Generates a pretty-printed JSON representation of this OpenAPI spec.
	pub fn as_json(&self) -> Result<String, serde_json::Error>
	{
		self.to_pretty_json()
	}

	/// Creates a [`Router`] that serves this spec as JSON.
	pub fn router(self) -> Router
	{
		let spec = self.0;

		Router::new().route(Self::JSON_PATH, routing::get(|| async move { Json(spec) }))
	}
}
