use axum::{
	extract::rejection::JsonRejection,
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const POST_DELETED: &str = "Post deleted successfully";
const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Body of every non-`Post` reply: the delete acknowledgement and all errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
	pub message: String,
}

impl From<&str> for MessageResponse {
	fn from(value: &str) -> Self {
		Self { message: value.to_string() }
	}
}

impl From<String> for MessageResponse {
	fn from(message: String) -> Self {
		Self { message }
	}
}

#[derive(Debug, Error)]
pub enum ServiceError {
	/// Transport failure talking to the upstream API.
	#[error("upstream request failed: {0}")]
	Upstream(#[from] reqwest::Error),

	/// Upstream body was not the JSON shape we expected.
	#[error("failed to decode upstream body: {0}")]
	Deserialization(#[from] serde_json::Error),

	#[error("invalid post id `{0}`")]
	InvalidId(String),

	#[error("{message}")]
	BadRequest { status: StatusCode, message: String },

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

impl From<JsonRejection> for ServiceError {
	fn from(rejection: JsonRejection) -> Self {
		ServiceError::BadRequest {
			status: rejection.status(),
			message: rejection.body_text(),
		}
	}
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServiceError::InvalidId(_) => StatusCode::BAD_REQUEST,
			ServiceError::BadRequest { status, .. } => *status,
			ServiceError::Upstream(_) | ServiceError::Deserialization(_) | ServiceError::InvalidConfig(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status();
		let body: MessageResponse = if status.is_server_error() {
			tracing::error!("{}", self);
			INTERNAL_SERVER_ERROR.into()
		} else {
			tracing::info!("Rejected request: {}", self);
			self.to_string().into()
		};
		(status, Json(body)).into_response()
	}
}
