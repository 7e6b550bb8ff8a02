use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Store;
use crate::meals::{repo as meal_repo, repo_types::Meal};
use crate::users::repo_types::User;

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        User::insert(&self.db, user).await
    }

    async fn find_user_by_session(&self, session_id: Uuid) -> anyhow::Result<Option<User>> {
        User::find_by_session(&self.db, session_id).await
    }

    async fn list_users_by_session(&self, session_id: Uuid) -> anyhow::Result<Vec<User>> {
        User::list_by_session(&self.db, session_id).await
    }

    async fn insert_meal(&self, meal: &Meal) -> anyhow::Result<()> {
        meal_repo::insert(&self.db, meal).await
    }

    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        meal_repo::list_by_user(&self.db, user_id).await
    }

    async fn list_meals_chronological(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        meal_repo::list_by_user_chronological(&self.db, user_id).await
    }

    async fn find_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
        meal_repo::find_owned(&self.db, user_id, meal_id).await
    }

    async fn update_meal(&self, meal: &Meal) -> anyhow::Result<Option<Meal>> {
        meal_repo::update_owned(&self.db, meal).await
    }

    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<u64> {
        meal_repo::delete_owned(&self.db, user_id, meal_id).await
    }
}
