use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{ApiError, ValidationErrorBuilder};
use crate::meals::metrics::MealMetrics;
use crate::users::{repo_types::User, services::is_valid_email};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub birth_date: OffsetDateTime,
}

impl RegisterRequest {
    /// Trims and lowercases the email, then checks the remaining fields.
    pub fn normalize_and_validate(&mut self) -> Result<(), ApiError> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();

        let mut errors = ValidationErrorBuilder::new();
        if self.name.is_empty() {
            errors.add("name", "name is required");
        }
        if !is_valid_email(&self.email) {
            errors.add("email", "invalid email");
        }
        if self.birth_date > OffsetDateTime::now_utc() {
            errors.add("birthDate", "birthDate cannot be in the future");
        }
        errors.finish()
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub best_score: u64,
    pub current_score: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub meals_count: u64,
    pub in_diet: u64,
    pub out_diet: u64,
    pub score: ScoreResponse,
}

impl From<MealMetrics> for MetricsResponse {
    fn from(m: MealMetrics) -> Self {
        Self {
            meals_count: m.total,
            in_diet: m.in_diet,
            out_diet: m.out_diet,
            score: ScoreResponse {
                best_score: m.best_streak,
                current_score: m.current_streak,
            },
        }
    }
}
