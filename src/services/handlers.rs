use crate::{adapters::repositories::TPostRepository, domain::post::Post};

use super::response::{MessageResponse, ServiceError, POST_DELETED};

/// The four pass-through operations. Each one is a single upstream call with no local state.
pub struct PostHandler;
impl PostHandler {
	pub async fn list_posts(repository: &dyn TPostRepository) -> Result<Vec<Post>, ServiceError> {
		repository.list().await
	}

	pub async fn get_post(
		id: &str,
		repository: &dyn TPostRepository,
	) -> Result<Post, ServiceError> {
		repository.get(id).await
	}

	/// The inbound post is forwarded as decoded; the upstream's copy (with its id) is returned.
	pub async fn create_post(
		post: Post,
		repository: &dyn TPostRepository,
	) -> Result<Post, ServiceError> {
		repository.create(&post).await
	}

	/// Rejects a non-numeric id before anything is sent upstream.
	pub async fn delete_post(
		id: &str,
		repository: &dyn TPostRepository,
	) -> Result<MessageResponse, ServiceError> {
		let id = id.parse::<i64>().map_err(|_| ServiceError::InvalidId(id.to_string()))?;
		repository.delete(id).await?;
		Ok(POST_DELETED.into())
	}
}

#[cfg(test)]
pub(crate) mod test {
	use std::sync::Mutex;

	use async_trait::async_trait;

	use crate::{
		adapters::repositories::TPostRepository,
		domain::post::Post,
		services::{
			handlers::PostHandler,
			response::{ServiceError, POST_DELETED},
		},
	};

	#[derive(Debug, Clone, PartialEq, Eq)]
	pub(crate) enum Call {
		List,
		Get(String),
		Create(Post),
		Delete(i64),
	}

	/// Answers like an echoing upstream and remembers what it was asked.
	#[derive(Default)]
	pub(crate) struct RecordingRepository {
		pub(crate) posts: Vec<Post>,
		pub(crate) calls: Mutex<Vec<Call>>,
	}

	impl RecordingRepository {
		pub(crate) fn calls(&self) -> Vec<Call> {
			self.calls.lock().unwrap().clone()
		}
		fn record(
			&self,
			call: Call,
		) {
			self.calls.lock().unwrap().push(call);
		}
	}

	#[async_trait]
	impl TPostRepository for RecordingRepository {
		async fn list(&self) -> Result<Vec<Post>, ServiceError> {
			self.record(Call::List);
			Ok(self.posts.clone())
		}

		async fn get(
			&self,
			id: &str,
		) -> Result<Post, ServiceError> {
			self.record(Call::Get(id.to_string()));
			Ok(serde_json::from_str(&format!(r#"{{"userId":1,"id":{id},"title":"t","body":"b"}}"#))?)
		}

		async fn create(
			&self,
			post: &Post,
		) -> Result<Post, ServiceError> {
			self.record(Call::Create(post.clone()));
			Ok(Post {
				id: 101,
				..post.clone()
			})
		}

		async fn delete(
			&self,
			id: i64,
		) -> Result<(), ServiceError> {
			self.record(Call::Delete(id));
			Ok(())
		}
	}

	fn sample(id: i64) -> Post {
		Post {
			user_id: 1,
			id,
			title: format!("title {id}"),
			body: format!("body {id}"),
		}
	}

	#[tokio::test]
	async fn test_list_passes_posts_through() {
		'_given: {
			let repository = RecordingRepository {
				posts: (1..=3).map(sample).collect(),
				..Default::default()
			};

			'_when: {
				let posts = PostHandler::list_posts(&repository).await.unwrap();

				'_then: {
					assert_eq!(posts, repository.posts);
					assert_eq!(repository.calls(), vec![Call::List]);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_get_forwards_raw_id() {
		let repository = RecordingRepository::default();

		let post = PostHandler::get_post("3", &repository).await.unwrap();

		assert_eq!(post.id, 3);
		assert_eq!(repository.calls(), vec![Call::Get("3".into())]);
	}

	#[tokio::test]
	async fn test_create_forwards_decoded_post() {
		let repository = RecordingRepository::default();
		let inbound = Post {
			user_id: 5,
			id: 0,
			title: "foo".into(),
			body: "bar".into(),
		};

		let created = PostHandler::create_post(inbound.clone(), &repository).await.unwrap();

		assert_eq!(created.id, 101);
		assert_eq!(created.title, "foo");
		assert_eq!(repository.calls(), vec![Call::Create(inbound)]);
	}

	#[tokio::test]
	async fn test_delete_parses_id() {
		let repository = RecordingRepository::default();

		let message = PostHandler::delete_post("42", &repository).await.unwrap();

		assert_eq!(message.message, POST_DELETED);
		assert_eq!(repository.calls(), vec![Call::Delete(42)]);
	}

	#[tokio::test]
	async fn test_delete_non_numeric_id_makes_no_call() {
		let repository = RecordingRepository::default();

		let result = PostHandler::delete_post("abc", &repository).await;

		assert!(matches!(result, Err(ServiceError::InvalidId(id)) if id == "abc"));
		assert!(repository.calls().is_empty());
	}
}
