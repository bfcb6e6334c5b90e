use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

/// Secret key shared with the upstream processor.
///
/// Read once at startup and never mutated. `Debug` is redacted so the key
/// cannot leak through configuration dumps or log lines.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SecretKey(String);

impl SecretKey {
	pub fn new(secret: impl Into<String>) -> Self {
		Self(secret.into())
	}

	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Value for the `Authorization` header: the key is the username and
	/// the password is empty.
	pub fn basic_auth(&self) -> String {
		let encoded = STANDARD.encode(format!("{}:", self.0));
		format!("Basic {encoded}")
	}
}

impl fmt::Debug for SecretKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretKey(***)")
	}
}
