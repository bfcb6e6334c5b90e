use payment_gateway_facade::domain::payment::PaymentPayload;
use payment_gateway_facade::use_cases::dto::{ForwardPaymentCommand, ForwardedPayment};
use payment_gateway_facade::use_cases::forward_payment::{
	ForwardPaymentError, ForwardPaymentUseCase,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

use crate::support::{
	TEST_AUTHORIZATION, TRANSACTIONS_PATH, forward_use_case_for, gateway_for,
	unreachable_url,
};

fn pix_payment() -> Value {
	json!({
		"paymentMethod": "PIX",
		"amount": 1000,
		"customer": {
			"name": "Maria Souza",
			"email": "maria@example.com",
			"document": { "number": "12345678909", "type": "cpf" }
		},
		"items": [{ "title": "Ebook", "unitPrice": 1000, "quantity": 1 }]
	})
}

fn command(method: &str, body: Value) -> ForwardPaymentCommand {
	ForwardPaymentCommand {
		method:  method.to_string(),
		payload: PaymentPayload::from(body),
	}
}

#[tokio::test]
async fn test_forward_sends_authenticated_request_with_unchanged_body() {
	let processor = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(TRANSACTIONS_PATH))
		.and(header("authorization", TEST_AUTHORIZATION))
		.and(header("content-type", "application/json"))
		.and(header("accept", "application/json"))
		.and(body_json(pix_payment()))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "tx_1" })))
		.expect(1)
		.mount(&processor)
		.await;

	let result = forward_use_case_for(&processor)
		.execute(command("pix", pix_payment()))
		.await;

	assert_eq!(
		result,
		Ok(ForwardedPayment {
			status: 200,
			body:   Some(json!({ "id": "tx_1" })),
		})
	);
}

#[tokio::test]
async fn test_forward_uses_single_endpoint_regardless_of_method_label() {
	let processor = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(TRANSACTIONS_PATH))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "tx_2" })))
		.expect(3)
		.mount(&processor)
		.await;
	let use_case = forward_use_case_for(&processor);

	for label in ["pix", "credit-card", "boleto"] {
		let result = use_case.execute(command(label, pix_payment())).await;
		assert!(result.is_ok());
	}
}

#[tokio::test]
async fn test_forward_mirrors_non_200_success_status() {
	let processor = MockServer::start().await;
	let created = json!({ "id": "tx_3", "status": "waiting_payment", "pix": { "qrcode": "000201" } });
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
		.mount(&processor)
		.await;

	let result = forward_use_case_for(&processor)
		.execute(command("pix", pix_payment()))
		.await;

	assert_eq!(
		result,
		Ok(ForwardedPayment {
			status: 201,
			body:   Some(created),
		})
	);
}

#[tokio::test]
async fn test_forward_keeps_empty_success_body_empty() {
	let processor = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(204))
		.expect(1)
		.mount(&processor)
		.await;

	let result = forward_use_case_for(&processor)
		.execute(command("pix", pix_payment()))
		.await;

	assert_eq!(
		result,
		Ok(ForwardedPayment {
			status: 204,
			body:   None,
		})
	);
}

#[tokio::test]
async fn test_forward_relays_upstream_rejection() {
	let processor = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(
			ResponseTemplate::new(402).set_body_json(json!({ "error": "card_declined" })),
		)
		.expect(1)
		.mount(&processor)
		.await;

	let result = forward_use_case_for(&processor)
		.execute(command("credit-card", json!({ "paymentMethod": "CARD" })))
		.await;

	assert_eq!(
		result,
		Err(ForwardPaymentError::UpstreamRejection {
			status: 402,
			body:   json!({ "error": "card_declined" }),
		})
	);
}

#[tokio::test]
async fn test_forward_rejection_with_empty_body_keeps_status() {
	let processor = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(401))
		.mount(&processor)
		.await;

	let result = forward_use_case_for(&processor)
		.execute(command("pix", pix_payment()))
		.await;

	assert_eq!(
		result,
		Err(ForwardPaymentError::UpstreamRejection {
			status: 401,
			body:   json!({ "message": "internal error processing payment" }),
		})
	);
}

#[tokio::test]
async fn test_forward_relays_plain_text_rejection_as_json_string() {
	let processor = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
		.mount(&processor)
		.await;

	let result = forward_use_case_for(&processor)
		.execute(command("boleto", json!({ "paymentMethod": "BOLETO" })))
		.await;

	assert_eq!(
		result,
		Err(ForwardPaymentError::UpstreamRejection {
			status: 502,
			body:   Value::String("Bad Gateway".to_string()),
		})
	);
}

#[tokio::test]
async fn test_forward_passes_null_body_through() {
	let processor = MockServer::start().await;
	Mock::given(method("POST"))
		.and(body_json(Value::Null))
		.respond_with(
			ResponseTemplate::new(422)
				.set_body_json(json!({ "message": "paymentMethod is required" })),
		)
		.expect(1)
		.mount(&processor)
		.await;

	let result = forward_use_case_for(&processor)
		.execute(command("pix", Value::Null))
		.await;

	assert_eq!(
		result,
		Err(ForwardPaymentError::UpstreamRejection {
			status: 422,
			body:   json!({ "message": "paymentMethod is required" }),
		})
	);
}

#[tokio::test]
async fn test_forward_transport_failure() {
	let use_case = ForwardPaymentUseCase::new(gateway_for(unreachable_url()));

	let result = use_case.execute(command("pix", pix_payment())).await;

	assert!(matches!(
		result,
		Err(ForwardPaymentError::TransportFailure(_))
	));
}
