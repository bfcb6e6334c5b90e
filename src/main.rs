use std::sync::Arc;

use payment_gateway_facade::infrastructure::config::settings::Config;
use payment_gateway_facade::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	let config = Arc::new(Config::load().map_err(std::io::Error::other)?);
	run(config).await
}
