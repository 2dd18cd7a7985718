//! GPA tiers and score computation.
//!
//! Every course falls into one of three tiers depending on its credit load.
//! Each tier has a fixed multiplier, and a course's GPA score is
//!
//! ```text
//! grade.coefficient * credit * multiplier(tier(credit))
//! ```

use super::{Course, Credit};

/// The GPA tier of a course, selected by its credit load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpaTier
{
	/// Courses with a credit load of 2 or less.
	Low,

	/// Courses with a credit load of exactly 3.
	Medium,

	/// Courses with a credit load of 4.
	High,
}

impl GpaTier
{
	/// Determines the tier for the given `credit`.
	pub const fn for_credit(credit: Credit) -> Self
	{
		match credit.get() {
			0..=2 => Self::Low,
			3 => Self::Medium,
			_ => Self::High,
		}
	}
}

/// The multipliers for each [`GpaTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpaTierTable
{
	/// Multiplier for [`GpaTier::Low`].
	pub low: u16,

	/// Multiplier for [`GpaTier::Medium`].
	pub medium: u16,

	/// Multiplier for [`GpaTier::High`].
	pub high: u16,
}

impl Default for GpaTierTable
{
	fn default() -> Self
	{
		Self { low: 3, medium: 5, high: 10 }
	}
}

impl GpaTierTable
{
	/// Returns the multiplier for the given `tier`.
	pub const fn multiplier(&self, tier: GpaTier) -> u16
	{
		match tier {
			GpaTier::Low => self.low,
			GpaTier::Medium => self.medium,
			GpaTier::High => self.high,
		}
	}

	/// Computes the GPA score for the given `course`.
	///
	/// The tier is selected by the same credit value that is multiplied in.
	pub fn total_gpa(&self, course: &Course) -> i64
	{
		let credit = course.credit;
		let multiplier = self.multiplier(GpaTier::for_credit(credit));

		i64::from(course.grade.coefficient) * i64::from(credit.get()) * i64::from(multiplier)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;
	use crate::services::courses::{CourseID, Grade};

	fn course(credit: i32, coefficient: i32) -> Course
	{
		Course {
			id: Some(CourseID::from(1)),
			name: String::from("Algebra"),
			credit: Credit::new(credit).expect("valid credit"),
			grade: Grade { coefficient, note: String::new() },
		}
	}

	#[test]
	fn tier_boundaries() -> color_eyre::Result<()>
	{
		for credit in 0..=2 {
			let credit = Credit::new(credit).expect("valid credit");
			testing::assert_eq!(GpaTier::for_credit(credit), GpaTier::Low);
		}

		testing::assert_eq!(GpaTier::for_credit(Credit::new(3).expect("valid credit")), GpaTier::Medium);
		testing::assert_eq!(GpaTier::for_credit(Credit::new(4).expect("valid credit")), GpaTier::High);

		Ok(())
	}

	#[test]
	fn total_gpa_uses_tier_of_same_credit() -> color_eyre::Result<()>
	{
		let table = GpaTierTable { low: 7, medium: 11, high: 13 };

		testing::assert_eq!(table.total_gpa(&course(2, 3)), 3 * 2 * 7);
		testing::assert_eq!(table.total_gpa(&course(3, 4)), 4 * 3 * 11);
		testing::assert_eq!(table.total_gpa(&course(4, 2)), 2 * 4 * 13);

		Ok(())
	}

	#[test]
	fn default_multipliers() -> color_eyre::Result<()>
	{
		let table = GpaTierTable::default();

		testing::assert_eq!(table.total_gpa(&course(1, 5)), 5 * 3);
		testing::assert_eq!(table.total_gpa(&course(3, 5)), 5 * 3 * 5);
		testing::assert_eq!(table.total_gpa(&course(4, 5)), 5 * 4 * 10);
		testing::assert_eq!(table.total_gpa(&course(0, 5)), 0);

		Ok(())
	}

	#[test]
	fn large_coefficients_do_not_overflow() -> color_eyre::Result<()>
	{
		let table = GpaTierTable { low: 1, medium: 1, high: u16::MAX };
		let expected = i64::from(i32::MAX) * 4 * i64::from(u16::MAX);

		testing::assert_eq!(table.total_gpa(&course(4, i32::MAX)), expected);

		Ok(())
	}
}
