//! A tiny service that reports whether the API is up.

use std::fmt;

pub(crate) mod http;

/// A service that responds with a fixed message as long as the process is
/// serving requests.
#[derive(Clone, Copy)]
pub struct HealthService
{
	/// The message sent back to callers.
	message: &'static str,
}

impl fmt::Debug for HealthService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("HealthService").finish_non_exhaustive()
	}
}

impl HealthService
{
	/// Create a new [`HealthService`].
	#[tracing::instrument]
	pub fn new() -> Self
	{
		Self { message: "course-gpa-api is running" }
	}

	/// Returns the health message.
	#[tracing::instrument(level = "debug")]
	pub async fn status(&self) -> &'static str
	{
		self.message
	}
}
