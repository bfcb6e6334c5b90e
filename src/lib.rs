use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

use crate::adapters::web::health_handler::health;
use crate::adapters::web::payments_handler::payments;
use crate::adapters::web::schema::json_config;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateway::http_payment_gateway::HttpPaymentGateway;
use crate::use_cases::forward_payment::ForwardPaymentUseCase;
use crate::use_cases::health_check::HealthCheckUseCase;

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod health_handler;
		pub mod payments_handler;
		pub mod schema;
	}
}

pub mod domain {
	pub mod credential;
	pub mod gateway;
	pub mod payment;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod gateway {
		pub mod http_payment_gateway;
	}
}

pub mod use_cases {
	pub mod dto;
	pub mod forward_payment;
	pub mod health_check;
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let http_client = Client::new();

	let gateway = HttpPaymentGateway::new(
		http_client,
		config.upstream_url.clone(),
		config.secret_key.clone(),
	);
	let forward_payment_use_case = ForwardPaymentUseCase::new(gateway);
	let health_check_use_case = HealthCheckUseCase::new(config.environment.clone());

	let max_body_bytes = config.max_body_bytes;
	let server = HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.app_data(json_config(max_body_bytes))
			.app_data(web::Data::new(forward_payment_use_case.clone()))
			.app_data(web::Data::new(health_check_use_case.clone()))
			.service(payments)
			.service(health)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.host.as_str(), config.port))?;

	info!(
		"Payment gateway facade listening on {}:{}, forwarding to {}",
		config.host, config.port, config.upstream_url
	);
	info!(
		"Payment endpoint: http://localhost:{}/api/payments/{{method}}",
		config.port
	);

	server.run().await
}
