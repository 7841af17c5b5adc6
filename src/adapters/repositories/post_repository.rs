use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::{domain::post::Post, services::response::ServiceError};

use super::TPostRepository;

/// Forwards every operation to a REST API exposing a `/posts` resource.
pub struct UpstreamPostRepository {
	client: Client,
	base_url: String,
}

impl UpstreamPostRepository {
	pub fn new(
		client: Client,
		base_url: &Url,
	) -> Self {
		Self {
			client,
			base_url: base_url.as_str().trim_end_matches('/').to_string(),
		}
	}

	pub fn collection_url(&self) -> String {
		format!("{}/posts", self.base_url)
	}

	pub fn resource_url(
		&self,
		id: impl std::fmt::Display,
	) -> String {
		format!("{}/posts/{}", self.base_url, id)
	}

	/// Reads the whole body and decodes it. The status code is only logged.
	async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
		let status = response.status();
		if !status.is_success() {
			tracing::warn!("Upstream {} answered {}, decoding body anyway", response.url(), status);
		}
		let body = response.bytes().await?;
		Ok(serde_json::from_slice(&body)?)
	}
}

#[async_trait]
impl TPostRepository for UpstreamPostRepository {
	async fn list(&self) -> Result<Vec<Post>, ServiceError> {
		let url = self.collection_url();
		tracing::debug!("GET {}", url);
		let response = self.client.get(url).send().await?;
		Self::decode(response).await
	}

	async fn get(
		&self,
		id: &str,
	) -> Result<Post, ServiceError> {
		let url = self.resource_url(id);
		tracing::debug!("GET {}", url);
		let response = self.client.get(url).send().await?;
		Self::decode(response).await
	}

	async fn create(
		&self,
		post: &Post,
	) -> Result<Post, ServiceError> {
		let url = self.collection_url();
		let payload = serde_json::to_vec(post)?;
		tracing::debug!("POST {}", url);
		let response = self
			.client
			.post(url)
			.header(CONTENT_TYPE, "application/json")
			.body(payload)
			.send()
			.await?;
		Self::decode(response).await
	}

	async fn delete(
		&self,
		id: i64,
	) -> Result<(), ServiceError> {
		let url = self.resource_url(id);
		tracing::debug!("DELETE {}", url);
		let response = self.client.delete(url).send().await?;
		let status = response.status();
		let discarded = response.bytes().await?;
		tracing::debug!("Upstream delete answered {} ({} bytes discarded)", status, discarded.len());
		Ok(())
	}
}
