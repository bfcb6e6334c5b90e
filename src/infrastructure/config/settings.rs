use serde::Deserialize;

use crate::domain::credential::SecretKey;

pub const DEFAULT_UPSTREAM_URL: &str =
	"https://apiv2.payevo.com.br/functions/v1/transactions";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub secret_key:       SecretKey,
	pub upstream_url:     String,
	pub host:             String,
	pub port:             u16,
	pub environment:      Option<String>,
	pub server_keepalive: u64,
	pub max_body_bytes:   usize,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("secret_key", "")?
			.set_default("upstream_url", DEFAULT_UPSTREAM_URL)?
			.set_default("host", "0.0.0.0")?
			.set_default("port", 3000)?
			.set_default("server_keepalive", 75)?
			.set_default("max_body_bytes", 102_400)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
