use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::payment::PaymentPayload;

#[derive(Debug, Clone)]
pub struct ForwardPaymentCommand {
	pub method:  String,
	pub payload: PaymentPayload,
}

/// Upstream 2xx reply as relayed to the caller. No body means the caller
/// gets an empty response too.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardedPayment {
	pub status: u16,
	pub body:   Option<Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HealthReport {
	pub status:      String,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub environment: Option<String>,
}
