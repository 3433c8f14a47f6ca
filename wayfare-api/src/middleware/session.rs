use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity injected into request extensions by
/// [`require_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Gate for protected routes: resolve the session cookie to a server-side
/// session or short-circuit with 401 before any handler runs.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match resolve_session(&state, &jar).await? {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => Err(AppError::AuthError(
            "Unauthorized. Please log in.".to_string(),
        )),
    }
}

/// Look up the session behind the cookie, if any. A missing cookie and an
/// expired or destroyed session both resolve to `None`.
pub async fn resolve_session(
    state: &AppState,
    jar: &CookieJar,
) -> Result<Option<CurrentUser>, AppError> {
    let Some(cookie) = jar.get(&state.policy.session_cookie) else {
        return Ok(None);
    };

    let session = state.sessions.get(cookie.value()).await?;

    Ok(session.map(|s| CurrentUser {
        id: s.user_id,
        name: s.name,
        email: s.email,
    }))
}
