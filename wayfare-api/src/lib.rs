use axum::{
    handler::HandlerWithoutStateExt,
    http::{Method, StatusCode},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod bookings;
pub mod cities;
pub mod error;
pub mod flights;
pub mod middleware;
pub mod pages;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    // Anything no route claims falls through to the static directory, and
    // from there to the plain 404 body.
    let static_files = ServeDir::new(&state.policy.static_dir)
        .not_found_service(handle_404.into_service());

    Router::new()
        .merge(pages::routes())
        .merge(auth::routes())
        .merge(cities::routes())
        .merge(flights::routes())
        .merge(bookings::routes(state.clone()))
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_404() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 - Page Not Found")
}
