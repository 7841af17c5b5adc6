pub(crate) mod post_repository;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::{domain::post::Post, services::response::ServiceError};

pub use post_repository::UpstreamPostRepository;

/// Where posts live. Every call is a single round trip; nothing is kept between calls.
#[async_trait]
pub trait TPostRepository: Send + Sync {
	async fn list(&self) -> Result<Vec<Post>, ServiceError>;

	/// `id` is forwarded as given, without numeric validation.
	async fn get(
		&self,
		id: &str,
	) -> Result<Post, ServiceError>;

	async fn create(
		&self,
		post: &Post,
	) -> Result<Post, ServiceError>;

	/// Whatever the upstream answers is discarded.
	async fn delete(
		&self,
		id: i64,
	) -> Result<(), ServiceError>;
}

/// Router state shared by every request.
#[derive(Clone)]
pub struct RepositoryState(pub Arc<dyn TPostRepository>);

impl RepositoryState {
	pub fn new(repository: impl TPostRepository + 'static) -> Self {
		Self(Arc::new(repository))
	}
}

impl Deref for RepositoryState {
	type Target = dyn TPostRepository;
	fn deref(&self) -> &Self::Target {
		self.0.as_ref()
	}
}
