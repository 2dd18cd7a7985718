//! HTTP handlers for this service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing, Router};

use super::{Course, CourseID, CourseResponse, CourseService, NewCourse};
use crate::http::extract::{Json, Path};
use crate::http::ErrorResponse;
use crate::middleware;

impl From<CourseService> for Router
{
	fn from(svc: CourseService) -> Self
	{
		Router::new()
			.route("/", routing::get(get_many).post(create))
			.route("/:course", routing::get(get_single).put(update).delete(delete))
			.route_layer(middleware::cors::permissive())
			.with_state(svc)
	}
}

/// Fetch all courses.
#[tracing::instrument]
#[utoipa::path(
  get,
  path = "/courses",
  tag = "Courses",
  operation_id = "get_courses",
  responses((status = 200, description = "All courses, in creation order.", body = [Course])),
)]
pub(crate) async fn get_many(State(svc): State<CourseService>) -> Json<Vec<Course>>
{
	Json(svc.get_all().await)
}

/// Fetch a course by its name.
///
/// The name is matched case-insensitively; if multiple courses share a name,
/// the oldest one is returned.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  get,
  path = "/courses/{name}",
  tag = "Courses",
  operation_id = "get_course",
  params(("name" = String, Path, description = "a course's name")),
  responses(
    (status = 200, description = "The course.", body = Course),
    (status = 400, description = "The name was empty.", body = ErrorResponse),
    (status = 404, description = "No course has that name.", body = ErrorResponse),
  ),
)]
pub(crate) async fn get_single(
	State(svc): State<CourseService>,
	Path(name): Path<String>,
) -> Result<Json<Course>, ErrorResponse>
{
	let course = svc.get_by_name(&name).await?;

	Ok(Json(course))
}

/// Create a new course.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  post,
  path = "/courses",
  tag = "Courses",
  operation_id = "create_course",
  request_body = NewCourse,
  responses(
    (status = 201, description = "The course was created.", body = CourseResponse),
    (status = 400, description = "The credit, name, or grade was invalid.", body = ErrorResponse),
  ),
)]
pub(crate) async fn create(
	State(svc): State<CourseService>,
	Json(course): Json<NewCourse>,
) -> Result<(StatusCode, Json<CourseResponse>), ErrorResponse>
{
	let res = svc.create(course).await?;

	Ok((StatusCode::CREATED, Json(res)))
}

/// Replace an existing course.
///
/// The ID in the URI takes precedence over any ID in the request body.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  put,
  path = "/courses/{id}",
  tag = "Courses",
  operation_id = "update_course",
  params(("id" = i32, Path, description = "a course's ID")),
  request_body = NewCourse,
  responses(
    (status = 200, description = "The course was updated.", body = CourseResponse),
    (status = 400, description = "The id, credit, name, or grade was invalid.", body = ErrorResponse),
    (status = 404, description = "No course has that ID.", body = ErrorResponse),
  ),
)]
pub(crate) async fn update(
	State(svc): State<CourseService>,
	Path(id): Path<i32>,
	Json(course): Json<NewCourse>,
) -> Result<Json<CourseResponse>, ErrorResponse>
{
	let res = svc.update(id, course).await?;

	Ok(Json(res))
}

/// Delete a course.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  delete,
  path = "/courses/{id}",
  tag = "Courses",
  operation_id = "delete_course",
  params(("id" = i32, Path, description = "a course's ID")),
  responses(
    (status = 200, description = "The course was deleted."),
    (status = 404, description = "No course has that ID.", body = ErrorResponse),
  ),
)]
pub(crate) async fn delete(
	State(svc): State<CourseService>,
	Path(id): Path<i32>,
) -> Result<(), ErrorResponse>
{
	svc.delete(CourseID::from(id)).await?;

	Ok(())
}
