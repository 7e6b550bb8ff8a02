use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::meals::repo_types::Meal;

pub async fn insert(db: &PgPool, meal: &Meal) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO meal (id, name, description, ate_at, is_diet, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(meal.id)
    .bind(&meal.name)
    .bind(&meal.description)
    .bind(meal.ate_at)
    .bind(meal.is_diet)
    .bind(meal.user_id)
    .execute(db)
    .await
    .context("insert meal")?;
    Ok(())
}

/// All meals of a user in the table's natural order.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, name, description, ate_at, is_diet, user_id
          FROM meal
         WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list meals by user")?;
    Ok(rows)
}

/// All meals of a user, oldest first.
pub async fn list_by_user_chronological(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, name, description, ate_at, is_diet, user_id
          FROM meal
         WHERE user_id = $1
         ORDER BY ate_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list meals by user chronologically")?;
    Ok(rows)
}

pub async fn find_owned(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
    let row = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, name, description, ate_at, is_diet, user_id
          FROM meal
         WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("find meal")?;
    Ok(row)
}

/// Overwrite every mutable column of an owned meal. Returns `None` when no row matched.
pub async fn update_owned(db: &PgPool, meal: &Meal) -> anyhow::Result<Option<Meal>> {
    let row = sqlx::query_as::<_, Meal>(
        r#"
        UPDATE meal
           SET name = $1, description = $2, ate_at = $3, is_diet = $4
         WHERE id = $5 AND user_id = $6
        RETURNING id, name, description, ate_at, is_diet, user_id
        "#,
    )
    .bind(&meal.name)
    .bind(&meal.description)
    .bind(meal.ate_at)
    .bind(meal.is_diet)
    .bind(meal.id)
    .bind(meal.user_id)
    .fetch_optional(db)
    .await
    .context("update meal")?;
    Ok(row)
}

pub async fn delete_owned(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<u64> {
    let res = sqlx::query("DELETE FROM meal WHERE id = $1 AND user_id = $2")
        .bind(meal_id)
        .bind(user_id)
        .execute(db)
        .await
        .context("delete meal")?;
    Ok(res.rows_affected())
}
