use tracing::{debug, info};
use uuid::Uuid;

use crate::meals::dto::{CreateMealRequest, UpdateMealRequest};
use crate::meals::metrics::MealMetrics;
use crate::meals::repo_types::Meal;
use crate::store::Store;

pub async fn create_meal(
    store: &dyn Store,
    user_id: Uuid,
    req: CreateMealRequest,
) -> anyhow::Result<Meal> {
    let meal = Meal {
        id: Uuid::new_v4(),
        name: req.name,
        description: req.description,
        ate_at: req.ate_at,
        is_diet: req.is_diet,
        user_id,
    };
    store.insert_meal(&meal).await?;
    info!(meal_id = %meal.id, %user_id, "meal created");
    Ok(meal)
}

/// Reads the owned meal, merges the present fields and writes it back.
/// `None` when the meal does not exist or belongs to someone else.
pub async fn update_meal(
    store: &dyn Store,
    user_id: Uuid,
    meal_id: Uuid,
    changes: UpdateMealRequest,
) -> anyhow::Result<Option<Meal>> {
    let Some(mut meal) = store.find_meal(user_id, meal_id).await? else {
        return Ok(None);
    };
    if changes.is_empty() {
        debug!(%meal_id, "update without changes");
        return Ok(Some(meal));
    }
    changes.apply(&mut meal);
    let updated = store.update_meal(&meal).await?;
    if updated.is_some() {
        info!(%meal_id, %user_id, "meal updated");
    }
    Ok(updated)
}

pub async fn delete_meal(store: &dyn Store, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<()> {
    let removed = store.delete_meal(user_id, meal_id).await?;
    if removed == 0 {
        debug!(%meal_id, %user_id, "delete matched no meal");
    } else {
        info!(%meal_id, %user_id, "meal deleted");
    }
    Ok(())
}

pub async fn user_metrics(store: &dyn Store, user_id: Uuid) -> anyhow::Result<MealMetrics> {
    let meals = store.list_meals_chronological(user_id).await?;
    Ok(MealMetrics::from_meals(&meals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::users::repo_types::User;
    use time::macros::datetime;
    use time::OffsetDateTime;

    async fn seed_user(store: &MemoryStore) -> Uuid {
        let user = User {
            id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            birth_date: datetime!(1990-05-01 0:00 UTC),
        };
        store.insert_user(&user).await.unwrap();
        user.id
    }

    fn lunch(ate_at: OffsetDateTime, is_diet: bool) -> CreateMealRequest {
        CreateMealRequest {
            name: "Lunch".into(),
            description: "rice and beans".into(),
            ate_at,
            is_diet,
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let store = MemoryStore::default();
        let user_id = seed_user(&store).await;
        let created = create_meal(&store, user_id, lunch(datetime!(2024-03-10 12:30 UTC), true))
            .await
            .unwrap();

        let found = store.find_meal(user_id, created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn update_of_foreign_meal_is_none() {
        let store = MemoryStore::default();
        let owner = seed_user(&store).await;
        let other = seed_user(&store).await;
        let meal = create_meal(&store, owner, lunch(datetime!(2024-03-10 12:30 UTC), true))
            .await
            .unwrap();

        let changes = UpdateMealRequest {
            is_diet: Some(false),
            ..Default::default()
        };
        let res = update_meal(&store, other, meal.id, changes).await.unwrap();
        assert!(res.is_none());

        let untouched = store.find_meal(owner, meal.id).await.unwrap().unwrap();
        assert!(untouched.is_diet);
    }

    #[tokio::test]
    async fn update_sets_diet_flag_to_false() {
        let store = MemoryStore::default();
        let user_id = seed_user(&store).await;
        let meal = create_meal(&store, user_id, lunch(datetime!(2024-03-10 12:30 UTC), true))
            .await
            .unwrap();

        let changes = UpdateMealRequest {
            is_diet: Some(false),
            ..Default::default()
        };
        let updated = update_meal(&store, user_id, meal.id, changes)
            .await
            .unwrap()
            .unwrap();
        assert!(!updated.is_diet);
        assert_eq!(updated.name, meal.name);
    }

    #[tokio::test]
    async fn metrics_follow_ate_at_not_insertion_order() {
        let store = MemoryStore::default();
        let user_id = seed_user(&store).await;
        // Inserted out of order; chronologically: T, T, F, T.
        for (ate_at, is_diet) in [
            (datetime!(2024-03-10 20:00 UTC), false),
            (datetime!(2024-03-10 08:00 UTC), true),
            (datetime!(2024-03-11 08:00 UTC), true),
            (datetime!(2024-03-10 12:00 UTC), true),
        ] {
            create_meal(&store, user_id, lunch(ate_at, is_diet)).await.unwrap();
        }

        let m = user_metrics(&store, user_id).await.unwrap();
        assert_eq!(m.total, 4);
        assert_eq!(m.in_diet, 3);
        assert_eq!(m.out_diet, 1);
        assert_eq!(m.best_streak, 2);
        assert_eq!(m.current_streak, 1);
    }

    #[tokio::test]
    async fn delete_is_scoped_to_owner() {
        let store = MemoryStore::default();
        let owner = seed_user(&store).await;
        let other = seed_user(&store).await;
        let meal = create_meal(&store, owner, lunch(datetime!(2024-03-10 12:30 UTC), true))
            .await
            .unwrap();

        delete_meal(&store, other, meal.id).await.unwrap();
        assert!(store.find_meal(owner, meal.id).await.unwrap().is_some());

        delete_meal(&store, owner, meal.id).await.unwrap();
        assert!(store.find_meal(owner, meal.id).await.unwrap().is_none());
    }
}
