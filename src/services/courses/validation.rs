//! Input validation for course requests.
//!
//! Each check returns the validated value, so that callers can only ever work
//! with data that passed it.

use super::{CourseID, Credit, Error, Grade, Result};

/// Ensures `name` is present and not empty.
pub fn check_name(name: Option<&str>) -> Result<&str>
{
	name.filter(|name| !name.is_empty())
		.ok_or(Error::InvalidName)
}

/// Ensures `credit` is present and in the range `0..=4`.
pub fn check_credit(credit: Option<i32>) -> Result<Credit>
{
	credit
		.and_then(Credit::new)
		.ok_or(Error::InvalidCredit { credit })
}

/// Ensures `grade` is present.
pub fn check_grade(grade: Option<Grade>) -> Result<Grade>
{
	grade.ok_or(Error::MissingGrade)
}

/// Ensures `id` is present and not negative.
pub fn check_id(id: Option<i32>) -> Result<CourseID>
{
	id.filter(|&id| id >= 0)
		.map(CourseID::from)
		.ok_or(Error::InvalidId { id })
}
