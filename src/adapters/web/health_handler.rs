use actix_web::{HttpResponse, Responder, get, web};

use crate::use_cases::health_check::HealthCheckUseCase;

#[get("/health")]
pub async fn health(health_check_use_case: web::Data<HealthCheckUseCase>) -> impl Responder {
	HttpResponse::Ok().json(health_check_use_case.execute())
}
