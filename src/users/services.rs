use axum_extra::extract::cookie::{Cookie, SameSite};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::store::Store;
use crate::users::repo_types::User;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Fresh session token. UUID v4 draws from the OS random source.
pub fn new_session_token() -> Uuid {
    Uuid::new_v4()
}

/// Cookie that carries the session token back to the client.
pub fn session_cookie(cfg: &SessionConfig, token: Uuid) -> Cookie<'static> {
    Cookie::build((cfg.cookie_name.clone(), token.to_string()))
        .path("/")
        .max_age(time::Duration::days(cfg.max_age_days))
        .http_only(true)
        .secure(cfg.secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Looks up the user owning `token`. Absence is not an error here.
pub async fn resolve_session(store: &dyn Store, token: &str) -> anyhow::Result<Option<User>> {
    let Ok(session_id) = Uuid::parse_str(token) else {
        debug!("session token is not a uuid");
        return Ok(None);
    };
    store.find_user_by_session(session_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use time::macros::datetime;

    fn user_with_session(session_id: Uuid) -> User {
        User {
            id: Uuid::new_v4(),
            session_id,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            birth_date: datetime!(1990-05-01 0:00 UTC),
        }
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("ana@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn session_cookie_is_root_scoped_for_seven_days() {
        let token = new_session_token();
        let cookie = session_cookie(&SessionConfig::default(), token);
        assert_eq!(cookie.name(), "sessionId");
        assert_eq!(cookie.value(), token.to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn tokens_are_distinct() {
        assert_ne!(new_session_token(), new_session_token());
    }

    #[tokio::test]
    async fn resolve_finds_matching_user_only() {
        let store = MemoryStore::default();
        let token = new_session_token();
        let user = user_with_session(token);
        store.insert_user(&user).await.unwrap();
        store
            .insert_user(&user_with_session(new_session_token()))
            .await
            .unwrap();

        let found = resolve_session(&store, &token.to_string()).await.unwrap();
        assert_eq!(found, Some(user));

        let missing = resolve_session(&store, &new_session_token().to_string())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn resolve_treats_malformed_token_as_absent() {
        let store = MemoryStore::default();
        let found = resolve_session(&store, "not-a-uuid").await.unwrap();
        assert!(found.is_none());
    }
}
