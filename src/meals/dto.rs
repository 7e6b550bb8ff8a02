use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{ApiError, ValidationErrorBuilder};
use crate::meals::repo_types::Meal;

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub ate_at: OffsetDateTime,
    pub is_diet: bool,
}

impl CreateMealRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = ValidationErrorBuilder::new();
        if self.name.trim().is_empty() {
            errors.add("name", "name is required");
        }
        errors.finish()
    }
}

/// Partial update. A field that is absent or `null` keeps the stored value;
/// any present value, `false` and `""` included, replaces it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMealRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub ate_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub is_diet: Option<bool>,
}

impl UpdateMealRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = ValidationErrorBuilder::new();
        if matches!(&self.name, Some(n) if n.trim().is_empty()) {
            errors.add("name", "name cannot be empty");
        }
        errors.finish()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.ate_at.is_none()
            && self.is_diet.is_none()
    }

    /// Merges the present fields over `meal`.
    pub fn apply(self, meal: &mut Meal) {
        if let Some(name) = self.name {
            meal.name = name;
        }
        if let Some(description) = self.description {
            meal.description = description;
        }
        if let Some(ate_at) = self.ate_at {
            meal.ate_at = ate_at;
        }
        if let Some(is_diet) = self.is_diet {
            meal.is_diet = is_diet;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

#[derive(Debug, Serialize)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}
