use std::{env, net::SocketAddr};

use reqwest::Url;

use crate::services::response::ServiceError;

pub const DEFAULT_SERVER_IP_PORT: &str = "0.0.0.0:8000";
pub const DEFAULT_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com";

pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: SocketAddr,
	pub upstream_url: Url,

	/// Comma separated, `*` allows any origin
	pub allow_origins: String,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| env::var(key).ok())
	}

	pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or(DEFAULT_SERVER_IP_PORT.into());
		let upstream_url = lookup("UPSTREAM_URL").unwrap_or(DEFAULT_UPSTREAM_URL.into());
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("*".to_string());

		let server_ip_port = server_ip_port
			.parse::<SocketAddr>()
			.map_err(|err| ServiceError::InvalidConfig(format!("SERVER_IP_PORT `{server_ip_port}`: {err}")))?;
		let upstream_url = Url::parse(&upstream_url)
			.map_err(|err| ServiceError::InvalidConfig(format!("UPSTREAM_URL `{upstream_url}`: {err}")))?;

		Ok(Config {
			log_level,
			server_ip_port,
			upstream_url,
			allow_origins,
		})
	}
}
