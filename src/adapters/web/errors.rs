use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;
use serde_json::Value;

use crate::use_cases::forward_payment::ForwardPaymentError;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Payment processor rejected the request.")]
	UpstreamRejection {
		status: u16,
		#[error(not(source))]
		body:   Value,
	},
	#[display("Request data is invalid.")]
	BadClientDataError,
	#[display("Request body exceeds the size limit.")]
	PayloadTooLargeError,
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::UpstreamRejection { .. } => "Upstream Rejection".to_string(),
			ApiError::BadClientDataError => "Bad request".to_string(),
			ApiError::PayloadTooLargeError => "Payload Too Large".to_string(),
			ApiError::InternalServerError => "Internal Server Error".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		match self {
			ApiError::UpstreamRejection { body, .. } => {
				HttpResponse::build(self.status_code())
					.content_type(ContentType::json())
					.json(body)
			}
			ApiError::BadClientDataError | ApiError::PayloadTooLargeError => {
				HttpResponse::build(self.status_code())
					.content_type(ContentType::json())
					.json(ErrorResponse {
						status_code: self.status_code().as_u16(),
						error:       self.to_string(),
						message:     self.name(),
					})
			}
			ApiError::InternalServerError => HttpResponse::build(self.status_code())
				.content_type(ContentType::json())
				.json(ForwardPaymentError::internal_error_body()),
		}
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::UpstreamRejection { status, .. } => {
				StatusCode::from_u16(*status)
					.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
			}
			ApiError::BadClientDataError => StatusCode::BAD_REQUEST,
			ApiError::PayloadTooLargeError => StatusCode::PAYLOAD_TOO_LARGE,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<ForwardPaymentError> for ApiError {
	fn from(err: ForwardPaymentError) -> Self {
		match err {
			ForwardPaymentError::UpstreamRejection { status, body } => {
				ApiError::UpstreamRejection { status, body }
			}
			ForwardPaymentError::TransportFailure(_) |
			ForwardPaymentError::RequestBuild(_) => ApiError::InternalServerError,
		}
	}
}
