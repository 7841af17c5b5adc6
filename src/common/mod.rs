use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::services::response::ServiceError;

/// Builds CORS from a comma separated origin list. `*` allows any origin.
pub fn cors_layer(allow_origins: &str) -> Result<CorsLayer, ServiceError> {
	let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::DELETE]);

	if allow_origins.trim() == "*" {
		return Ok(layer.allow_origin(Any));
	}

	let origins = allow_origins
		.split(',')
		.map(str::trim)
		.filter(|origin| !origin.is_empty())
		.map(|origin| {
			origin
				.parse::<HeaderValue>()
				.map_err(|_| ServiceError::InvalidConfig(format!("ALLOW_ORIGINS entry `{origin}`")))
		})
		.collect::<Result<Vec<_>, _>>()?;
	Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
