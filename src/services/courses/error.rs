//! The errors that can occur when interacting with this service.

use thiserror::Error;

use super::CourseID;
use crate::http::{ErrorKind, IntoErrorResponse};

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the course service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error
{
	/// A course name was missing or empty.
	#[error("name cannot be null or empty!")]
	InvalidName,

	/// A credit value was missing or outside of `0..=4`.
	#[error("credit is null or not between 0-4! {}", display_opt(.credit))]
	InvalidCredit
	{
		/// The submitted credit value.
		credit: Option<i32>,
	},

	/// A course's grade was missing.
	#[error("grade cannot be null!")]
	MissingGrade,

	/// A course ID was missing or negative.
	#[error("id cannot be null or less than zero! {}", display_opt(.id))]
	InvalidId
	{
		/// The submitted ID.
		id: Option<i32>,
	},

	/// No course with the given name exists.
	#[error("course not found with name: {name}")]
	CourseNameNotFound
	{
		/// The name we searched for.
		name: String,
	},

	/// No course with the given ID exists.
	#[error("course not found with id: {id}")]
	CourseIdNotFound
	{
		/// The ID we searched for.
		id: CourseID,
	},
}

impl IntoErrorResponse for Error
{
	fn kind(&self) -> ErrorKind
	{
		match self {
			Self::InvalidName
			| Self::InvalidCredit { .. }
			| Self::MissingGrade
			| Self::InvalidId { .. } => ErrorKind::InvalidInput,
			Self::CourseNameNotFound { .. } | Self::CourseIdNotFound { .. } => ErrorKind::NotFound,
		}
	}
}

/// Formats a possibly missing value the way clients expect it in messages.
fn display_opt(value: &Option<i32>) -> String
{
	value.map_or_else(|| String::from("null"), |value| value.to_string())
}
