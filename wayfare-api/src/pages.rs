use std::path::Path;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::middleware::session::resolve_session;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/login", get(landing))
        .route("/signup", get(landing))
        .route("/flight.html", get(flight_page))
}

async fn landing(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state.policy.static_dir, "index.html").await
}

/// The flight page is gated: unauthenticated visitors get an inline alert
/// bouncing them to the login page instead of a 401.
async fn flight_page(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    match resolve_session(&state, &jar).await? {
        Some(_) => Ok(serve_page(&state.policy.static_dir, "flight.html")
            .await?
            .into_response()),
        None => Ok(Html(
            "<script>alert(\"You must be logged in to access this page.\"); \
             window.location.href='/login';</script>"
                .to_string(),
        )
        .into_response()),
    }
}

async fn serve_page(dir: &str, file: &str) -> Result<Html<String>, AppError> {
    let path = Path::new(dir).join(file);
    let body = tokio::fs::read_to_string(&path).await.map_err(|e| {
        AppError::InternalServerError(anyhow::anyhow!(
            "failed to read page {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(Html(body))
}
