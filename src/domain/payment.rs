use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment document exactly as the caller sent it.
///
/// The relay never interprets it; the upstream processor owns validation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct PaymentPayload(pub Value);

impl PaymentPayload {
	/// The `paymentMethod` discriminator, if the payload carries one.
	pub fn payment_method(&self) -> Option<&str> {
		self.0.get("paymentMethod").and_then(Value::as_str)
	}

	pub fn as_value(&self) -> &Value {
		&self.0
	}
}

impl From<Value> for PaymentPayload {
	fn from(value: Value) -> Self {
		Self(value)
	}
}
