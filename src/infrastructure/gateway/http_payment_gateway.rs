use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::domain::credential::SecretKey;
use crate::domain::gateway::{GatewayError, GatewayResponse, PaymentGateway};
use crate::domain::payment::PaymentPayload;

/// Upstream processor reached over HTTP with Basic authentication.
///
/// Every payment type goes to the same endpoint; the processor tells them
/// apart by the `paymentMethod` field of the body.
#[derive(Clone)]
pub struct HttpPaymentGateway {
	http_client: Client,
	url:         String,
	secret_key:  SecretKey,
}

impl HttpPaymentGateway {
	pub fn new(http_client: Client, url: String, secret_key: SecretKey) -> Self {
		Self {
			http_client,
			url,
			secret_key,
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	// Built fresh on every call so no header state is shared between requests.
	fn headers(&self) -> Result<HeaderMap, GatewayError> {
		// base64 output is always a visible ASCII header value; the error arm
		// only reports a local build problem, never a network one.
		let mut auth = HeaderValue::try_from(self.secret_key.basic_auth())
			.map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;
		auth.set_sensitive(true);

		let mut headers = HeaderMap::new();
		headers.insert(AUTHORIZATION, auth);
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		Ok(headers)
	}
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
	async fn create_transaction(
		&self,
		payload: &PaymentPayload,
	) -> Result<GatewayResponse, GatewayError> {
		let body = serde_json::to_vec(payload.as_value())
			.map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

		let resp = self
			.http_client
			.post(&self.url)
			.headers(self.headers()?)
			.body(body)
			.send()
			.await
			.map_err(|e| {
				if e.is_builder() {
					GatewayError::InvalidRequest(e.to_string())
				} else {
					GatewayError::Transport(e.to_string())
				}
			})?;

		let status = resp.status();
		let raw = resp
			.bytes()
			.await
			.map_err(|e| GatewayError::Transport(e.to_string()))?;
		let body = decode_body(&raw);

		if status.is_success() {
			Ok(GatewayResponse {
				status: status.as_u16(),
				body,
			})
		} else {
			Err(GatewayError::Rejected {
				status: status.as_u16(),
				body,
			})
		}
	}
}

/// Parses an upstream body. Non-JSON text is kept as a JSON string and an
/// empty body yields `None`.
fn decode_body(raw: &[u8]) -> Option<Value> {
	if raw.iter().all(u8::is_ascii_whitespace) {
		return None;
	}

	match serde_json::from_slice(raw) {
		Ok(value) => Some(value),
		Err(_) => Some(Value::String(String::from_utf8_lossy(raw).into_owned())),
	}
}
