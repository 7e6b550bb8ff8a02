use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::{repo_types::User, services::resolve_session};

/// Resolves the session cookie to its user, rejecting with 401 before the
/// handler runs when the cookie is missing or unknown.
pub struct SessionUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.session.cookie_name)
            .map(|c| c.value().to_string())
            .ok_or_else(|| {
                warn!("missing session cookie");
                ApiError::unauthorized("Unauthorized")
            })?;

        match resolve_session(state.store.as_ref(), &token).await? {
            Some(user) => Ok(SessionUser(user)),
            None => {
                warn!("unknown session");
                Err(ApiError::unauthorized("Unauthorized"))
            }
        }
    }
}
