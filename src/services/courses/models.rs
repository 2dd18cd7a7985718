//! Request / Response types for this service.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// A unique identifier for a course.
///
/// Course IDs are chosen by the client, not generated by the API.
#[derive(
	Debug,
	Display,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	From,
	Into,
	Serialize,
	Deserialize,
	utoipa::ToSchema,
)]
#[serde(transparent)]
pub struct CourseID(i32);

/// The credit load of a course.
///
/// This is always in the range `0..=4`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, utoipa::ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(transparent)]
pub struct Credit(u8);

impl Credit
{
	/// The highest credit load a course can have.
	pub const MAX: u8 = 4;

	/// Creates a new [`Credit`], if `value` is in range.
	pub fn new(value: i32) -> Option<Self>
	{
		u8::try_from(value)
			.ok()
			.filter(|&credit| credit <= Self::MAX)
			.map(Self)
	}

	/// Returns the raw credit value.
	pub const fn get(self) -> u8
	{
		self.0
	}
}

/// The grade a course was completed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Grade
{
	/// Factor representing the quality of the grade.
	///
	/// This is multiplied into the course's GPA score.
	pub coefficient: i32,

	/// Free-form description of the grade.
	#[serde(default)]
	pub note: String,
}

/// A course, as it is stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Course
{
	/// The course's ID.
	///
	/// This is `null` if the course was created without one.
	pub id: Option<CourseID>,

	/// The course's name.
	pub name: String,

	/// The course's credit load.
	pub credit: Credit,

	/// The grade the course was completed with.
	pub grade: Grade,
}

/// Request payload for creating or updating a course.
///
/// All fields are optional here so that missing values can be reported with a
/// proper validation error instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[cfg_attr(test, derive(Serialize))]
pub struct NewCourse
{
	/// The course's ID.
	///
	/// On updates, this is ignored in favor of the ID in the URI.
	pub id: Option<i32>,

	/// The course's name.
	pub name: Option<String>,

	/// The course's credit load (`0..=4`).
	pub credit: Option<i32>,

	/// The grade the course was completed with.
	pub grade: Option<Grade>,
}

/// Response payload for creating or updating a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
#[schema(title = "ApiResponse")]
pub struct CourseResponse
{
	/// The created / updated course.
	pub course: Course,

	/// The course's GPA score.
	#[serde(rename = "totalGpa")]
	pub total_gpa: i64,
}
