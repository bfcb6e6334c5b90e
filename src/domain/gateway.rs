use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use serde_json::Value;

use crate::domain::payment::PaymentPayload;

/// A 2xx reply from the upstream processor. `body` is `None` when the
/// processor sent no content.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
	pub status: u16,
	pub body:   Option<Value>,
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum GatewayError {
	/// The processor answered with a non-2xx status.
	#[display("Upstream rejected the request with status {status}")]
	Rejected {
		status: u16,
		#[error(not(source))]
		body:   Option<Value>,
	},
	/// The outbound request could not be built; nothing was sent.
	#[display("Could not build upstream request: {_0}")]
	InvalidRequest(#[error(not(source))] String),
	/// No response was obtained at all.
	#[display("Upstream unreachable: {_0}")]
	Transport(#[error(not(source))] String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn create_transaction(
		&self,
		payload: &PaymentPayload,
	) -> Result<GatewayResponse, GatewayError>;
}
