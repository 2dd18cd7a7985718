#![doc = include_str!("../README.md")]
// TODO: remove once https://github.com/tokio-rs/tracing/issues/2912 lands
#![allow(clippy::blocks_in_conditions)]

use std::fmt::Write;
use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::connect_info::IntoMakeServiceWithConnectInfo;
use axum::extract::ConnectInfo;
use axum::Router;
use tokio::net::TcpListener;

pub mod runtime;
pub use runtime::Config;

pub mod http;
pub mod middleware;
pub mod services;
pub mod openapi;

#[cfg(test)]
mod testing;

use services::{CourseService, HealthService};

#[allow(clippy::missing_docs_in_private_items)]
type Server = axum::serve::Serve<
	IntoMakeServiceWithConnectInfo<Router, SocketAddr>,
	axum::middleware::AddExtension<Router, ConnectInfo<SocketAddr>>,
>;

/// Run the API.
///
/// This function will not exit until the process is asked to shut down (see
/// [`runtime::signals::shutdown()`]).
/// If you want to supply a custom signal for graceful shutdown, use
/// [`run_until()`] instead.
pub async fn run(config: Config) -> anyhow::Result<()>
{
	server(config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(runtime::signals::shutdown())
		.await
		.context("run http server")
}

/// Run the API until a given future completes.
///
/// This function is the same as [`run()`], except that it also waits for the
/// provided `until` future, and shuts down the server when that future
/// resolves.
pub async fn run_until<Until>(config: Config, until: Until) -> anyhow::Result<()>
where
	Until: Future<Output = ()> + Send + 'static,
{
	server(config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(async move {
			tokio::select! {
				() = until => {}
				() = runtime::signals::shutdown() => {}
			}
		})
		.await
		.context("run http server")
}

/// Builds the API's [`Router`], including all services and middleware.
///
/// Every call creates a fresh, empty course store.
pub fn router(config: &Config) -> Router
{
	let health_svc = HealthService::new();
	let course_svc = CourseService::new(config.gpa_tiers);

	Router::new()
		.merge(Router::from(health_svc))
		.nest("/courses", Router::from(course_svc))
		.merge(openapi::Spec::new().router())
		.layer(middleware::panic_handler::layer())
		.layer(middleware::request_id::propagate())
		.layer(middleware::logging::layer!())
		.layer(middleware::request_id::set())
}

/// Runs the necessary setup for the API and returns a future that will run
/// the server when polled.
///
/// See [`run()`] and [`run_until()`].
async fn server(config: Config) -> anyhow::Result<Server>
{
	tracing::debug!(?config, "establishing TCP connection");

	let tcp_listener = TcpListener::bind(config.addr)
		.await
		.context("bind tcp socket")?;

	let addr = tcp_listener.local_addr().context("get tcp addr")?;

	tracing::info!(%addr, "listening for requests");

	let mut routes_message = String::from("registering routes:\n");

	for (path, methods) in openapi::Spec::new().routes() {
		writeln!(&mut routes_message, "    • {path} => [{methods}]")?;
	}

	tracing::info!("{routes_message}");
	tracing::info!("serving OpenAPI spec at <http://{addr}{}>", openapi::Spec::JSON_PATH);

	let api_service = router(&config).into_make_service_with_connect_info::<SocketAddr>();

	Ok(axum::serve(tcp_listener, api_service))
}
