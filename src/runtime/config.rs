//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the environment on startup.
//!
//! See the `.env.example` file in the root of the repository for all the
//! relevant variables and example values.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fmt};

use thiserror::Error;

use crate::services::courses::GpaTierTable;

/// The API's runtime configuration.
#[derive(Clone)]
pub struct Config
{
	/// The IP address and port the API is going to listen on.
	pub addr: SocketAddr,

	/// Directory to write log files into.
	///
	/// If this is `None`, logs will only be emitted to stderr.
	pub log_dir: Option<PathBuf>,

	/// The GPA multipliers for each credit tier.
	pub gpa_tiers: GpaTierTable,
}

impl fmt::Debug for Config
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Config")
			.field("addr", &format_args!("{}", self.addr))
			.field("log_dir", &self.log_dir)
			.field("gpa_tiers", &self.gpa_tiers)
			.finish()
	}
}

impl Default for Config
{
	fn default() -> Self
	{
		Self {
			addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080),
			log_dir: None,
			gpa_tiers: GpaTierTable::default(),
		}
	}
}

/// Error that can occur while initializing the API's [`Config`].
#[derive(Debug, Error)]
pub enum InitializeConfigError
{
	/// An environment variable contained invalid UTF-8.
	#[error("failed to read environment variable `{var}`: {source}")]
	Env
	{
		/// The environment variable we tried to read.
		var: &'static str,

		/// The original error we got from [`std::env::var()`] when we tried to
		/// read a value.
		source: env::VarError,
	},

	/// A configuration option could not be parsed into the required type.
	#[error("failed to parse configuration value `{var}`: {source}")]
	Parse
	{
		/// The environment variable containing the value.
		var: &'static str,

		/// The parsing error.
		source: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Config
{
	/// Initializes a [`Config`] by reading and parsing environment variables.
	///
	/// Every variable is optional; missing or empty ones fall back to the
	/// values of [`Config::default()`].
	#[tracing::instrument(err(Debug))]
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		let defaults = Self::default();

		let ip_addr = parse_from_env::<IpAddr>("COURSE_API_IP")?.unwrap_or(defaults.addr.ip());
		let port = parse_from_env::<u16>("COURSE_API_PORT")?.unwrap_or(defaults.addr.port());
		let addr = SocketAddr::new(ip_addr, port);
		let log_dir = parse_from_env::<PathBuf>("COURSE_API_LOG_DIR")?;

		let gpa_tiers = GpaTierTable {
			low: parse_from_env("COURSE_API_GPA_LOW")?.unwrap_or(defaults.gpa_tiers.low),
			medium: parse_from_env("COURSE_API_GPA_MEDIUM")?.unwrap_or(defaults.gpa_tiers.medium),
			high: parse_from_env("COURSE_API_GPA_HIGH")?.unwrap_or(defaults.gpa_tiers.high),
		};

		Ok(Self { addr, log_dir, gpa_tiers })
	}
}

/// Parses an environment variable into an `Option<T>`, returning `None` if the
/// variable is not set or empty.
fn parse_from_env<T>(var: &'static str) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let value = match env::var(var) {
		Ok(value) => value,
		Err(env::VarError::NotPresent) => return Ok(None),
		Err(source) => return Err(InitializeConfigError::Env { var, source }),
	};

	if value.is_empty() {
		return Ok(None);
	}

	value
		.parse::<T>()
		.map(Some)
		.map_err(|err| InitializeConfigError::Parse { var, source: Box::new(err) })
}
