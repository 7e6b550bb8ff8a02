use crate::users::repo_types::User;
use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Insert a freshly registered user.
    pub async fn insert(db: &PgPool, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, session_id, name, email, "birthDate")
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(user.session_id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.birth_date)
        .execute(db)
        .await
        .context("insert user")?;
        Ok(())
    }

    /// Find the user holding a session token.
    pub async fn find_by_session(db: &PgPool, session_id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, session_id, name, email, "birthDate"
            FROM users
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(db)
        .await
        .context("find user by session")?;
        Ok(user)
    }

    pub async fn list_by_session(db: &PgPool, session_id: Uuid) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, session_id, name, email, "birthDate"
            FROM users
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_all(db)
        .await
        .context("list users by session")?;
        Ok(users)
    }
}
