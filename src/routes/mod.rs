mod posts;

use axum::{routing::get, Router};

use crate::adapters::repositories::RepositoryState;

pub fn post_routers() -> Router<RepositoryState> {
	Router::new()
		.route("/posts", get(posts::list_posts).post(posts::create_post))
		.route("/posts/:id", get(posts::get_post).delete(posts::delete_post))
}

pub fn create_routes(state: RepositoryState) -> Router {
	post_routers().with_state(state)
}
