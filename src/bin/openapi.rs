//! Prints the API's OpenAPI specification as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use course_gpa_api::openapi::Spec;

/// This tool will generate a JSON representation of the API's OpenAPI
/// specification. Running it without any arguments will simply emit the spec
/// to stdout.
#[derive(Parser)]
struct Args
{
	/// Write the spec into a file instead of stdout.
	#[arg(short, long)]
	output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()>
{
	let args = Args::parse();
	let spec = Spec::new().as_json().context("serialize spec")?;

	let Some(output) = args.output else {
		println!("{spec}");
		return Ok(());
	};

	fs::write(&output, spec.into_bytes())
		.with_context(|| format!("write spec to `{}`", output.display()))?;

	Ok(())
}
