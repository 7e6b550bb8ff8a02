use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub session_id: Uuid,             // bearer credential, never exposed in JSON
    pub name: String,
    pub email: String,
    #[sqlx(rename = "birthDate")]
    #[serde(rename = "birthDate", with = "time::serde::rfc3339")]
    pub birth_date: OffsetDateTime,
}
