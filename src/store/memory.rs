use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Store;
use crate::meals::repo_types::Meal;
use crate::users::repo_types::User;

/// Vec-backed store; insertion order stands in for the table's natural order.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    meals: RwLock<Vec<Meal>>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.session_id == user.session_id) {
            anyhow::bail!("duplicate session_id");
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_session(&self, session_id: Uuid) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.session_id == session_id).cloned())
    }

    async fn list_users_by_session(&self, session_id: Uuid) -> anyhow::Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn insert_meal(&self, meal: &Meal) -> anyhow::Result<()> {
        let users = self.users.read().await;
        if !users.iter().any(|u| u.id == meal.user_id) {
            anyhow::bail!("meal owner {} does not exist", meal.user_id);
        }
        self.meals.write().await.push(meal.clone());
        Ok(())
    }

    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals.iter().filter(|m| m.user_id == user_id).cloned().collect())
    }

    async fn list_meals_chronological(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        let mut meals = self.list_meals(user_id).await?;
        meals.sort_by_key(|m| m.ate_at);
        Ok(meals)
    }

    async fn find_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals
            .iter()
            .find(|m| m.id == meal_id && m.user_id == user_id)
            .cloned())
    }

    async fn update_meal(&self, meal: &Meal) -> anyhow::Result<Option<Meal>> {
        let mut meals = self.meals.write().await;
        let Some(row) = meals
            .iter_mut()
            .find(|m| m.id == meal.id && m.user_id == meal.user_id)
        else {
            return Ok(None);
        };
        *row = meal.clone();
        Ok(Some(row.clone()))
    }

    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<u64> {
        let mut meals = self.meals.write().await;
        let before = meals.len();
        meals.retain(|m| !(m.id == meal_id && m.user_id == user_id));
        Ok((before - meals.len()) as u64)
    }
}
