//! OS signal handling for graceful shutdown.

use tokio::signal;

/// Resolves once the process should shut down.
///
/// This is on `SIGINT`, or `SIGTERM` on unix platforms.
pub async fn shutdown()
{
	#[cfg(unix)]
	{
		tokio::select! {
			() = sigint() => {}
			() = sigterm() => {}
		}
	}

	#[cfg(not(unix))]
	sigint().await;
}

/// Resolves when the process receives `SIGINT`.
#[tracing::instrument(target = "course_gpa_api::runtime")]
pub async fn sigint()
{
	match signal::ctrl_c().await {
		Ok(()) => tracing::warn!("received SIGINT, shutting down"),
		Err(error) => {
			tracing::error!(%error, "cannot listen for SIGINT");
			std::future::pending::<()>().await;
		}
	}
}

/// Resolves when the process receives `SIGTERM`.
#[cfg(unix)]
#[tracing::instrument(target = "course_gpa_api::runtime")]
async fn sigterm()
{
	use signal::unix::{signal, SignalKind};

	match signal(SignalKind::terminate()) {
		Ok(mut sigterm) => {
			sigterm.recv().await;
			tracing::warn!("received SIGTERM, shutting down");
		}
		Err(error) => {
			tracing::error!(%error, "cannot listen for SIGTERM");
			std::future::pending::<()>().await;
		}
	}
}
