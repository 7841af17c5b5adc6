use std::sync::OnceLock;

use reqwest::Client;

use crate::{
	adapters::repositories::{RepositoryState, UpstreamPostRepository},
	config::Config,
	services::response::ServiceError,
};

pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

/// One client for the whole process so upstream connections are pooled.
/// No timeout is set; calls wait as long as the transport allows.
pub fn http_client() -> Result<&'static Client, ServiceError> {
	static CLIENT: OnceLock<Client> = OnceLock::new();

	let c = match CLIENT.get() {
		None => {
			let client = Client::builder().build()?;
			CLIENT.get_or_init(|| client)
		}
		Some(c) => c,
	};
	Ok(c)
}

pub fn upstream_repository() -> Result<RepositoryState, ServiceError> {
	let repository = UpstreamPostRepository::new(http_client()?.clone(), &config()?.upstream_url);
	Ok(RepositoryState::new(repository))
}
