use std::error::Error;

use post_gateway::{
	common::cors_layer,
	dependencies::{config, upstream_repository},
	routes::create_routes,
};
use tower_http::trace::TraceLayer;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("post_gateway={},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!("Forwarding /posts to {}", config.upstream_url);
	let app = create_routes(upstream_repository()?)
		.layer(cors_layer(&config.allow_origins)?)
		.layer(TraceLayer::new_for_http());

	tracing::info!("Start Web Server on {}", config.server_ip_port);
	axum::Server::try_bind(&config.server_ip_port)?
		.serve(app.into_make_service())
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	tracing::info!("Web Server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for shutdown signal: {:?}", err);
		std::future::pending::<()>().await;
	}
}
