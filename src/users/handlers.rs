use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::{CookieJar, WithRejection};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    meals::services::user_metrics,
    state::AppState,
    users::{
        dto::{MetricsResponse, RegisterRequest, UsersResponse},
        extractors::SessionUser,
        repo_types::User,
        services::{new_session_token, session_cookie},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(register))
        .route("/users/metrics/", get(metrics))
}

/// Creates the user and hands back a fresh session cookie.
#[instrument(skip(state, jar, payload))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(mut payload), _): WithRejection<Json<RegisterRequest>, ApiError>,
) -> Result<(StatusCode, CookieJar), ApiError> {
    payload.normalize_and_validate()?;

    let session_id = new_session_token();
    let user = User {
        id: Uuid::new_v4(),
        session_id,
        name: payload.name,
        email: payload.email,
        birth_date: payload.birth_date,
    };
    state.store.insert_user(&user).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    let jar = jar.add(session_cookie(&state.config.session, session_id));
    Ok((StatusCode::CREATED, jar))
}

#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn list_users(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.store.list_users_by_session(user.session_id).await?;
    Ok(Json(UsersResponse { users }))
}

#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn metrics(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<MetricsResponse>, ApiError> {
    let m = user_metrics(state.store.as_ref(), user.id).await?;
    Ok(Json(m.into()))
}
