use axum::{
	extract::{rejection::JsonRejection, Path, State},
	http::StatusCode,
	Json,
};

use crate::{
	adapters::repositories::RepositoryState,
	domain::post::Post,
	services::{
		handlers::PostHandler,
		response::{MessageResponse, ServiceError},
	},
};

pub async fn list_posts(State(repository): State<RepositoryState>) -> Result<Json<Vec<Post>>, ServiceError> {
	let posts = PostHandler::list_posts(&*repository).await?;
	Ok(Json(posts))
}

pub async fn get_post(
	Path(id): Path<String>,
	State(repository): State<RepositoryState>,
) -> Result<Json<Post>, ServiceError> {
	let post = PostHandler::get_post(&id, &*repository).await?;
	Ok(Json(post))
}

pub async fn create_post(
	State(repository): State<RepositoryState>,
	payload: Result<Json<Post>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ServiceError> {
	let Json(post) = payload?;
	let created = PostHandler::create_post(post, &*repository).await?;
	Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_post(
	Path(id): Path<String>,
	State(repository): State<RepositoryState>,
) -> Result<Json<MessageResponse>, ServiceError> {
	let message = PostHandler::delete_post(&id, &*repository).await?;
	Ok(Json(message))
}
