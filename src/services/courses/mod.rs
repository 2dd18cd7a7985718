//! A service for managing courses and computing their GPA score.
//!
//! All courses are kept in memory, in a [`CourseStore`] guarded by a single
//! lock. Nothing is persisted; the store lives as long as the service does.

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

pub(crate) mod http;

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{Course, CourseID, CourseResponse, Credit, Grade, NewCourse};

mod gpa;
pub use gpa::{GpaTier, GpaTierTable};

pub mod validation;

mod store;
pub use store::CourseStore;

/// A service for managing courses.
#[derive(Clone)]
pub struct CourseService
{
	/// The stored courses.
	///
	/// Every operation that modifies the store holds the write lock for its
	/// entire lookup + mutation sequence.
	store: Arc<RwLock<CourseStore>>,

	/// Multipliers used for computing GPA scores.
	gpa_tiers: GpaTierTable,
}

impl fmt::Debug for CourseService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("CourseService")
			.field("gpa_tiers", &self.gpa_tiers)
			.finish_non_exhaustive()
	}
}

impl CourseService
{
	/// Create a new [`CourseService`] with an empty store.
	#[tracing::instrument]
	pub fn new(gpa_tiers: GpaTierTable) -> Self
	{
		Self { store: Arc::new(RwLock::new(CourseStore::new())), gpa_tiers }
	}

	/// Fetch all courses, in the order they were created.
	#[tracing::instrument(level = "debug")]
	pub async fn get_all(&self) -> Vec<Course>
	{
		self.store.read().await.list_all().to_vec()
	}

	/// Fetch the first course with the given name, ignoring case.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn get_by_name(&self, name: &str) -> Result<Course>
	{
		let name = validation::check_name(Some(name))?;
		let store = self.store.read().await;

		store.find_by_name(name).cloned()
	}

	/// Fetch the first course with the given ID.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn get_by_id(&self, id: CourseID) -> Result<Course>
	{
		self.store.read().await.find_by_id(id).cloned()
	}

	/// Create a new course.
	///
	/// The credit is validated before the name, and the name before the
	/// grade. A request with several invalid fields is rejected for the first
	/// of them.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn create(&self, course: NewCourse) -> Result<CourseResponse>
	{
		let NewCourse { id, name, credit, grade } = course;
		let credit = validation::check_credit(credit)?;
		let name = validation::check_name(name.as_deref())?.to_owned();
		let grade = validation::check_grade(grade)?;
		let course = Course { id: id.map(CourseID::from), name, credit, grade };
		let total_gpa = self.gpa_tiers.total_gpa(&course);

		self.store.write().await.add(course.clone());

		tracing::info!(id = ?course.id, name = %course.name, total_gpa, "created course");

		Ok(CourseResponse { course, total_gpa })
	}

	/// Replace the course with the given ID.
	///
	/// The `id` always wins over any ID in the request body. The course keeps
	/// its position in the store.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn update(&self, id: i32, course: NewCourse) -> Result<CourseResponse>
	{
		let NewCourse { id: _, name, credit, grade } = course;
		let id = validation::check_id(Some(id))?;
		let credit = validation::check_credit(credit)?;
		let name = validation::check_name(name.as_deref())?.to_owned();
		let grade = validation::check_grade(grade)?;
		let course = Course { id: Some(id), name, credit, grade };

		self.store.write().await.replace(id, course.clone())?;

		let total_gpa = self.gpa_tiers.total_gpa(&course);

		tracing::info!(%id, name = %course.name, total_gpa, "updated course");

		Ok(CourseResponse { course, total_gpa })
	}

	/// Delete the course with the given ID.
	///
	/// Returns the deleted course.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn delete(&self, id: CourseID) -> Result<Course>
	{
		let course = self.store.write().await.remove(id)?;

		tracing::info!(%id, name = %course.name, "deleted course");

		Ok(course)
	}
}
