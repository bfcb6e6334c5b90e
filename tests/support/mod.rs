#![allow(dead_code)]

use std::net::TcpListener;

use payment_gateway_facade::domain::credential::SecretKey;
use payment_gateway_facade::infrastructure::gateway::http_payment_gateway::HttpPaymentGateway;
use payment_gateway_facade::use_cases::forward_payment::ForwardPaymentUseCase;
use reqwest::Client;
use wiremock::MockServer;

pub const TEST_SECRET: &str = "sk_test_4f9a";
/// `base64("sk_test_4f9a:")`
pub const TEST_AUTHORIZATION: &str = "Basic c2tfdGVzdF80ZjlhOg==";
pub const TRANSACTIONS_PATH: &str = "/functions/v1/transactions";

pub fn gateway_for(url: String) -> HttpPaymentGateway {
	HttpPaymentGateway::new(Client::new(), url, SecretKey::new(TEST_SECRET))
}

pub fn forward_use_case_for(
	processor: &MockServer,
) -> ForwardPaymentUseCase<HttpPaymentGateway> {
	ForwardPaymentUseCase::new(gateway_for(format!(
		"{}{TRANSACTIONS_PATH}",
		processor.uri()
	)))
}

/// A URL nothing listens on, to provoke a connection failure.
pub fn unreachable_url() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	drop(listener);
	format!("http://127.0.0.1:{port}{TRANSACTIONS_PATH}")
}
