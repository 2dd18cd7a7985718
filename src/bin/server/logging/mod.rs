//! Log capturing facilities.

use anyhow::Context;
use course_gpa_api::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod stderr;
mod files;

/// The filter used if `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "course_gpa_api=info,tower_http=info,warn";

/// Keeps background logging machinery alive.
#[derive(Debug)]
pub struct Guard
{
	/// The guard returned by [`tracing_appender`]'s logging thread.
	#[allow(dead_code)]
	appender_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initializes [`tracing_subscriber`].
///
/// NOTE: the returned [`Guard`] flushes the file logs when dropped, which
/// means it has to stay alive until the program exits!
pub fn init(config: &Config) -> anyhow::Result<Guard>
{
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
		.context("parse log filter")?;

	let (files, appender_guard) = match config.log_dir.as_deref() {
		None => (None, None),
		Some(log_dir) => {
			let (layer, guard) = files::layer(log_dir).context("initialize file logging")?;
			(Some(layer), Some(guard))
		}
	};

	tracing_subscriber::registry()
		.with(Layer::and_then(stderr::layer(), files).with_filter(filter))
		.try_init()
		.context("install global subscriber")?;

	tracing::info!(log_dir = ?config.log_dir, "initialized logging");

	Ok(Guard { appender_guard })
}
