use crate::use_cases::dto::HealthReport;

/// Liveness report. Never consults the upstream processor.
#[derive(Clone)]
pub struct HealthCheckUseCase {
	environment: Option<String>,
}

impl HealthCheckUseCase {
	pub fn new(environment: Option<String>) -> Self {
		Self { environment }
	}

	pub fn execute(&self) -> HealthReport {
		HealthReport {
			status:      "ok".to_string(),
			environment: self.environment.clone(),
		}
	}
}
