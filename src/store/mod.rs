use async_trait::async_trait;
use uuid::Uuid;

use crate::meals::repo_types::Meal;
use crate::users::repo_types::User;

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Persistence seam shared by every handler. Meal operations always filter
/// by both the meal id and the owning user id.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()>;
    async fn find_user_by_session(&self, session_id: Uuid) -> anyhow::Result<Option<User>>;
    async fn list_users_by_session(&self, session_id: Uuid) -> anyhow::Result<Vec<User>>;

    async fn insert_meal(&self, meal: &Meal) -> anyhow::Result<()>;
    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>>;
    /// Meals ordered by `ate_at` ascending.
    async fn list_meals_chronological(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>>;
    async fn find_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>>;
    async fn update_meal(&self, meal: &Meal) -> anyhow::Result<Option<Meal>>;
    /// Returns the number of rows removed.
    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<u64>;
}
