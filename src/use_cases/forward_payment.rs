use derive_more::derive::{Display, Error};
use log::{debug, error, info};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::use_cases::dto::{ForwardPaymentCommand, ForwardedPayment};

pub const INTERNAL_ERROR_MESSAGE: &str = "internal error processing payment";

#[derive(Debug, Display, Error, PartialEq)]
pub enum ForwardPaymentError {
	/// The processor refused the payment; status and body go back verbatim.
	#[display("Upstream rejected the payment with status {status}")]
	UpstreamRejection {
		status: u16,
		#[error(not(source))]
		body:   Value,
	},
	/// Nothing came back from the processor. The cause is logged, not exposed.
	#[display("Could not reach the payment processor: {_0}")]
	TransportFailure(#[error(not(source))] String),
	/// The upstream request could not be built locally; nothing was sent.
	#[display("Could not build the payment request: {_0}")]
	RequestBuild(#[error(not(source))] String),
}

impl ForwardPaymentError {
	pub fn internal_error_body() -> Value {
		json!({ "message": INTERNAL_ERROR_MESSAGE })
	}
}

impl From<GatewayError> for ForwardPaymentError {
	fn from(err: GatewayError) -> Self {
		match err {
			GatewayError::Rejected { status, body } => {
				ForwardPaymentError::UpstreamRejection {
					status,
					body: body.unwrap_or_else(ForwardPaymentError::internal_error_body),
				}
			}
			GatewayError::Transport(message) => {
				ForwardPaymentError::TransportFailure(message)
			}
			GatewayError::InvalidRequest(message) => {
				ForwardPaymentError::RequestBuild(message)
			}
		}
	}
}

/// Relays a payment to the upstream processor without touching its content.
#[derive(Clone)]
pub struct ForwardPaymentUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> ForwardPaymentUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	pub async fn execute(
		&self,
		command: ForwardPaymentCommand,
	) -> Result<ForwardedPayment, ForwardPaymentError> {
		let request_id = Uuid::new_v4();
		let received_at = OffsetDateTime::now_utc()
			.format(&Rfc3339)
			.unwrap_or_default();

		info!(
			"[{received_at}] [{request_id}] Received payment request via '{}'",
			command.method
		);
		// The route label is informational; it is never checked against the body.
		debug!(
			"[{request_id}] Body paymentMethod: {:?}",
			command.payload.payment_method()
		);

		match self.gateway.create_transaction(&command.payload).await {
			Ok(resp) => {
				info!(
					"[{request_id}] Payment accepted by processor: {}",
					transaction_id(resp.body.as_ref())
				);
				Ok(ForwardedPayment {
					status: resp.status,
					body:   resp.body,
				})
			}
			Err(e) => {
				let err = ForwardPaymentError::from(e);
				match &err {
					ForwardPaymentError::UpstreamRejection { status, body } => {
						error!(
							"[{request_id}] Processor rejected payment ({status}): {body}"
						);
					}
					ForwardPaymentError::TransportFailure(message) => {
						error!("[{request_id}] Processor unreachable: {message}");
					}
					ForwardPaymentError::RequestBuild(message) => {
						error!("[{request_id}] Payment request not sent: {message}");
					}
				}
				Err(err)
			}
		}
	}
}

fn transaction_id(body: Option<&Value>) -> String {
	match body.and_then(|body| body.get("id")) {
		Some(Value::String(id)) => id.clone(),
		Some(id) => id.to_string(),
		None => "<none>".to_string(),
	}
}
