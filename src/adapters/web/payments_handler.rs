use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};

use crate::adapters::web::errors::ApiError;
use crate::domain::payment::PaymentPayload;
use crate::infrastructure::gateway::http_payment_gateway::HttpPaymentGateway;
use crate::use_cases::dto::ForwardPaymentCommand;
use crate::use_cases::forward_payment::ForwardPaymentUseCase;

/// Single handler for every payment type (`pix`, `credit-card`, ...).
/// The path label is only logged.
#[post("/api/payments/{method}")]
pub async fn payments(
	method: web::Path<String>,
	payload: web::Json<PaymentPayload>,
	forward_payment_use_case: web::Data<ForwardPaymentUseCase<HttpPaymentGateway>>,
) -> Result<HttpResponse, ApiError> {
	let command = ForwardPaymentCommand {
		method:  method.into_inner(),
		payload: payload.into_inner(),
	};

	let forwarded = forward_payment_use_case.execute(command).await?;
	let status =
		StatusCode::from_u16(forwarded.status).map_err(|_| ApiError::InternalServerError)?;

	let mut response = HttpResponse::build(status);
	Ok(match forwarded.body {
		Some(body) => response.json(body),
		None => response.finish(),
	})
}
