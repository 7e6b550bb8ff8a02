use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Meal record in the `meal` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub ate_at: OffsetDateTime,
    pub is_diet: bool,
    pub user_id: Uuid,
}
