use actix_web::{HttpRequest, error, web};
use log::warn;

use crate::adapters::web::errors::ApiError;

/// JSON extractor settings for payment bodies. A missing `Content-Type` is
/// accepted and the body parsed as JSON anyway; unreadable bodies get the
/// service's own error shape.
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
	web::JsonConfig::default()
		.limit(max_body_bytes)
		.content_type_required(false)
		.error_handler(json_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> error::Error {
	warn!("Rejected unreadable payment body on {}: {err}", req.path());
	match err {
		error::JsonPayloadError::Overflow { .. } |
		error::JsonPayloadError::OverflowKnownLength { .. } => {
			ApiError::PayloadTooLargeError.into()
		}
		_ => ApiError::BadClientDataError.into(),
	}
}
