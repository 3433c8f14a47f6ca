use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};

use wayfare_core::{password, StoreError};

use crate::error::AppError;
use crate::middleware::session::resolve_session;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/session-status", get(session_status))
}

#[derive(Debug, Deserialize)]
struct SignupForm {
    name: String,
    email: String,
    pass: String,
    pass2: String,
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    email: String,
    pass: String,
}

/// Inline alert shown by the form pages, then navigate on.
fn alert_redirect(message: &str, href: &str) -> Html<String> {
    Html(format!(
        "<script>alert(\"{}\"); window.location.href='{}';</script>",
        message, href
    ))
}

/// Inline alert, then back to the form the user came from.
fn alert_back(message: &str) -> Html<String> {
    Html(format!(
        "<script>alert(\"{}\"); window.history.back();</script>",
        message
    ))
}

async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    if form.pass != form.pass2 {
        return Ok(alert_back("Passwords do not match").into_response());
    }

    let hashed = password::hash(&form.pass)
        .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("password hashing: {}", e)))?;

    match state.users.create(&form.name, &form.email, &hashed).await {
        Ok(_) => Ok(alert_redirect("Signup successful!", "/login").into_response()),
        Err(StoreError::DuplicateEmail) => {
            Ok(alert_back("Email is already registered").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    // Unknown email and wrong password produce the same response.
    let user = match state.users.find_by_email(&form.email).await? {
        Some(u) if password::verify(&form.pass, &u.password_hash) => u,
        _ => return Ok(alert_back("Invalid email or password").into_response()),
    };

    let token = state.sessions.create(&user).await?;

    let cookie = Cookie::build((state.policy.session_cookie.clone(), token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build();

    let jar = jar.add(cookie);

    Ok((jar, alert_redirect("Login successful!", "/flight.html")).into_response())
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let token = jar
        .get(&state.policy.session_cookie)
        .map(|c| c.value().to_string());

    if let Some(token) = token {
        state.sessions.destroy(&token).await?;
    }

    let mut removal = Cookie::from(state.policy.session_cookie.clone());
    removal.set_path("/");
    let jar = jar.remove(removal);

    Ok((jar, Redirect::to("/")).into_response())
}

async fn session_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Value>, AppError> {
    match resolve_session(&state, &jar).await? {
        Some(user) => Ok(Json(json!({
            "loggedIn": true,
            "user": {
                "id": user.id,
                "name": user.name,
                "email": user.email,
            },
        }))),
        None => Ok(Json(json!({ "loggedIn": false }))),
    }
}
