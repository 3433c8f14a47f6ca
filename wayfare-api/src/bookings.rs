use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use wayfare_core::models::Booking;

use crate::error::AppError;
use crate::middleware::session::{require_session, CurrentUser};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/book", post(create_booking))
        .route("/bookings", get(list_bookings))
        .route("/delete-booking/{id}", delete(delete_booking))
        .route_layer(axum::middleware::from_fn_with_state(state, require_session))
}

#[derive(Debug, Deserialize)]
struct BookRequest {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    details: Value,
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<BookRequest>,
) -> Result<Json<Value>, AppError> {
    // The details payload is opaque but bounded; reject oversized payloads
    // before anything is written.
    let size = serde_json::to_vec(&req.details)
        .map(|b| b.len())
        .unwrap_or(usize::MAX);
    if size > state.policy.max_booking_details_bytes {
        return Err(AppError::ValidationError(
            "Booking details payload too large".to_string(),
        ));
    }

    let booking = state
        .bookings
        .create(&user.email, &req.kind, &req.details)
        .await?;

    info!(booking_id = %booking.id, owner = %user.email, "booking saved");

    Ok(Json(json!({ "message": "Booking saved successfully" })))
}

async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.list_by_owner(&user.email).await?;
    Ok(Json(bookings))
}

async fn delete_booking(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    // A non-UUID id cannot match anything; answering not-found keeps it
    // indistinguishable from a booking that exists but is not yours.
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok(booking_not_found());
    };

    if state.bookings.delete_by_owner_and_id(&user.email, id).await? {
        Ok(Json(json!({ "message": "Booking deleted successfully" })).into_response())
    } else {
        Ok(booking_not_found())
    }
}

fn booking_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Booking not found or already deleted" })),
    )
        .into_response()
}
