//! In-memory storage for courses.

use std::mem;

use itertools::{EitherOrBoth, Itertools};

use super::{Course, CourseID, Error, Result};

/// An ordered, in-memory collection of courses.
///
/// Courses are kept in insertion order. Neither IDs nor names are required to
/// be unique; lookups always return the first match.
#[derive(Debug, Default)]
pub struct CourseStore
{
	/// The stored courses, in insertion order.
	courses: Vec<Course>,
}

impl CourseStore
{
	/// Creates a new, empty [`CourseStore`].
	pub const fn new() -> Self
	{
		Self { courses: Vec::new() }
	}

	/// Returns all stored courses in insertion order.
	pub fn list_all(&self) -> &[Course]
	{
		&self.courses
	}

	/// Finds the first course with the given `name`, ignoring case.
	pub fn find_by_name(&self, name: &str) -> Result<&Course>
	{
		self.courses
			.iter()
			.find(|course| eq_ignore_case(&course.name, name))
			.ok_or_else(|| Error::CourseNameNotFound { name: name.to_owned() })
	}

	/// Finds the first course with the given `id`.
	pub fn find_by_id(&self, id: CourseID) -> Result<&Course>
	{
		self.courses
			.iter()
			.find(|course| course.id == Some(id))
			.ok_or(Error::CourseIdNotFound { id })
	}

	/// Appends a course to the end of the store.
	pub fn add(&mut self, course: Course)
	{
		self.courses.push(course);
	}

	/// Overwrites the first course with the given `id` in place.
	///
	/// Returns the course that was replaced.
	pub fn replace(&mut self, id: CourseID, updated: Course) -> Result<Course>
	{
		let idx = self.position_of(id)?;
		let slot = self
			.courses
			.get_mut(idx)
			.ok_or(Error::CourseIdNotFound { id })?;

		Ok(mem::replace(slot, updated))
	}

	/// Removes the first course with the given `id`.
	///
	/// Returns the removed course.
	pub fn remove(&mut self, id: CourseID) -> Result<Course>
	{
		let idx = self.position_of(id)?;

		Ok(self.courses.remove(idx))
	}

	/// Returns the index of the first course with the given `id`.
	fn position_of(&self, id: CourseID) -> Result<usize>
	{
		self.courses
			.iter()
			.position(|course| course.id == Some(id))
			.ok_or(Error::CourseIdNotFound { id })
	}
}

/// Compares two strings for equality, ignoring case.
///
/// The strings are compared one character at a time, so both need the same
/// number of characters. Two characters match if they are equal, if their
/// uppercase forms are equal, or if the lowercase forms of those are equal.
fn eq_ignore_case(lhs: &str, rhs: &str) -> bool
{
	lhs.chars()
		.zip_longest(rhs.chars())
		.all(|pair| matches!(pair, EitherOrBoth::Both(l, r) if char_eq_ignore_case(l, r)))
}

/// Compares two characters for equality, ignoring case.
fn char_eq_ignore_case(lhs: char, rhs: char) -> bool
{
	if lhs == rhs {
		return true;
	}

	let (lhs, rhs) = (to_upper(lhs), to_upper(rhs));

	lhs == rhs || to_lower(lhs) == to_lower(rhs)
}

/// Maps `c` to its uppercase form, if that is a single character.
fn to_upper(c: char) -> char
{
	let mut upper = c.to_uppercase();

	match (upper.next(), upper.next()) {
		(Some(upper), None) => upper,
		_ => c,
	}
}

/// Maps `c` to the first character of its lowercase form.
///
/// `'İ'` lowercases to `"i\u{307}"`; only the `'i'` is kept.
fn to_lower(c: char) -> char
{
	c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;
	use crate::services::courses::{Credit, Grade};

	fn course(id: i32, name: &str) -> Course
	{
		Course {
			id: Some(CourseID::from(id)),
			name: name.to_owned(),
			credit: Credit::new(3).expect("valid credit"),
			grade: Grade { coefficient: 4, note: String::from("AA") },
		}
	}

	#[test]
	fn preserves_insertion_order() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(2, "Physics"));
		store.add(course(1, "Algebra"));

		let names = store
			.list_all()
			.iter()
			.map(|course| course.name.as_str())
			.collect::<Vec<_>>();

		testing::assert_eq!(names, ["Physics", "Algebra"]);
		testing::assert_eq!(store.list_all().len(), 2);

		Ok(())
	}

	#[test]
	fn find_by_name_ignores_case() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "Algebra"));

		testing::assert_eq!(store.find_by_name("ALGEBRA"), Ok(&course(1, "Algebra")));
		testing::assert_eq!(store.find_by_name("algebra"), Ok(&course(1, "Algebra")));
		testing::assert_eq!(
			store.find_by_name("Geometry"),
			Err(Error::CourseNameNotFound { name: String::from("Geometry") }),
		);

		Ok(())
	}

	#[test]
	fn find_by_name_handles_non_ascii() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "Ökonomie"));

		testing::assert!(store.find_by_name("öKONOMIE").is_ok(), "non-ascii letters are case folded");

		Ok(())
	}

	#[test]
	fn find_by_name_compares_single_characters() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "İ"));
		store.add(course(2, "Straße"));

		testing::assert!(store.find_by_name("i").is_ok(), "dotted capital i matches i");
		testing::assert!(store.find_by_name("STRASSE").is_err(), "ß does not expand to SS");
		testing::assert!(store.find_by_name("strasse").is_err(), "lengths must match");
		testing::assert!(store.find_by_name("STRAßE").is_ok(), "other letters still fold");
		testing::assert!(store.find_by_name("Straß").is_err(), "prefixes do not match");

		Ok(())
	}

	#[test]
	fn duplicate_names_return_first_match() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "Algebra"));
		store.add(course(2, "algebra"));

		testing::assert_eq!(store.find_by_name("Algebra").map(|course| course.id), Ok(Some(CourseID::from(1))));

		Ok(())
	}

	#[test]
	fn empty_store_finds_nothing() -> color_eyre::Result<()>
	{
		let store = CourseStore::new();

		testing::assert!(store.list_all().is_empty(), "new store is empty");
		testing::assert!(store.find_by_name("Algebra").is_err(), "nothing to find");
		testing::assert!(store.find_by_id(CourseID::from(1)).is_err(), "nothing to find");

		Ok(())
	}

	#[test]
	fn replace_keeps_position() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "Algebra"));
		store.add(course(2, "Physics"));
		store.add(course(3, "Chemistry"));

		let previous = store.replace(CourseID::from(2), course(2, "Biology"));

		testing::assert_eq!(previous, Ok(course(2, "Physics")));
		testing::assert_eq!(store.list_all(), [course(1, "Algebra"), course(2, "Biology"), course(3, "Chemistry")]);

		Ok(())
	}

	#[test]
	fn replace_missing_leaves_store_unchanged() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "Algebra"));

		let result = store.replace(CourseID::from(9), course(9, "Physics"));

		testing::assert_eq!(result, Err(Error::CourseIdNotFound { id: CourseID::from(9) }));
		testing::assert_eq!(store.list_all(), [course(1, "Algebra")]);

		Ok(())
	}

	#[test]
	fn duplicate_ids_act_on_first_match() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "Algebra"));
		store.add(course(1, "Physics"));

		testing::assert_eq!(store.remove(CourseID::from(1)), Ok(course(1, "Algebra")));
		testing::assert_eq!(store.list_all(), [course(1, "Physics")]);

		Ok(())
	}

	#[test]
	fn remove() -> color_eyre::Result<()>
	{
		let mut store = CourseStore::new();

		store.add(course(1, "Algebra"));
		store.add(course(2, "Physics"));

		testing::assert_eq!(store.remove(CourseID::from(1)), Ok(course(1, "Algebra")));
		testing::assert_eq!(store.find_by_id(CourseID::from(1)), Err(Error::CourseIdNotFound { id: CourseID::from(1) }));
		testing::assert_eq!(store.remove(CourseID::from(1)), Err(Error::CourseIdNotFound { id: CourseID::from(1) }));
		testing::assert_eq!(store.list_all().len(), 1);

		Ok(())
	}
}
