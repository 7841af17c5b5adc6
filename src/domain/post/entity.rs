use serde::{Deserialize, Serialize};

/// A post as the upstream API describes it.
///
/// Missing fields decode to their zero value so a create body without `id` is accepted.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
	#[serde(rename = "userId")]
	pub user_id: i64,
	pub id: i64,
	pub title: String,
	pub body: String,
}
