//! The course GPA API server.

use anyhow::Context;
use course_gpa_api::runtime;
use course_gpa_api::Config;

mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()>
{
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("WARNING: failed to load `.env` file: {error}");
	}

	let config = Config::new().context("load config")?;
	let _guard = logging::init(&config).context("initialize logging")?;

	runtime::panic_hook::install();

	course_gpa_api::run(config).await.context("run API")
}
