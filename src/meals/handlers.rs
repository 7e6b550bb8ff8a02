use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{
    error::ApiError,
    meals::{
        dto::{CreateMealRequest, MealResponse, MealsResponse, UpdateMealRequest},
        services,
    },
    state::AppState,
    users::extractors::SessionUser,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/users/meal/", get(list_meals).post(create_meal))
        .route(
            "/users/meal/:id",
            get(get_meal).patch(update_meal).delete(delete_meal),
        )
}

#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn list_meals(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<MealsResponse>, ApiError> {
    let meals = state.store.list_meals(user.id).await?;
    Ok(Json(MealsResponse { meals }))
}

#[instrument(skip_all, fields(user_id = %user.id, meal_id = %id))]
pub async fn get_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<Json<MealResponse>, ApiError> {
    match state.store.find_meal(user.id, id).await? {
        Some(meal) => Ok(Json(MealResponse { meal })),
        None => {
            warn!("meal not found");
            Err(ApiError::not_found("Meal not found"))
        }
    }
}

/// POST /users/meal/ { name, description, ate_at, is_diet }
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn create_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    WithRejection(Json(body), _): WithRejection<Json<CreateMealRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;
    let meal = services::create_meal(state.store.as_ref(), user.id, body).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/meal/{}", meal.id))],
    ))
}

/// PATCH /users/meal/:id, any subset of { name, description, ate_at, is_diet }
#[instrument(skip_all, fields(user_id = %user.id, meal_id = %id))]
pub async fn update_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateMealRequest>, ApiError>,
) -> Result<Json<MealResponse>, ApiError> {
    body.validate()?;
    match services::update_meal(state.store.as_ref(), user.id, id, body).await? {
        Some(meal) => Ok(Json(MealResponse { meal })),
        None => {
            warn!("meal not found");
            Err(ApiError::not_found("Meal not found"))
        }
    }
}

#[instrument(skip_all, fields(user_id = %user.id, meal_id = %id))]
pub async fn delete_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<StatusCode, ApiError> {
    services::delete_meal(state.store.as_ref(), user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
