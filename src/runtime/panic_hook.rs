//! A global panic hook that routes panic messages through [`tracing`].
//!
//! See [`std::panic::set_hook()`] for more details.

use std::backtrace::Backtrace;
use std::any::Any;
use std::panic::{self, Location};

/// Installs the custom panic hook.
///
/// The previously installed hook still runs afterwards.
#[tracing::instrument(target = "course_gpa_api::runtime", name = "panic_hook")]
pub fn install()
{
	let previous = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		log_panic(info.payload(), info.location());
		previous(info)
	}));

	tracing::info!("installed panic hook");
}

/// Emits a single error event describing the panic.
fn log_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>)
{
	let payload = payload
		.downcast_ref::<&str>()
		.copied()
		.or_else(|| payload.downcast_ref::<String>().map(String::as_str))
		.unwrap_or("<non-string payload>");

	let location = location.map(ToString::to_string).unwrap_or_default();

	let backtrace = Backtrace::force_capture();

	tracing::error! {
		target: "course_gpa_api::runtime",
		%location,
		"panicked: {payload}\n---\nbacktrace:\n{backtrace}",
	};
}
