use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use wayfare_core::models::FlightQuery;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/testFlightAPI", get(search_flights))
}

/// Query parameters for the relay. Defaults match the sample query the
/// endpoint originally served, so a bare GET still works.
#[derive(Debug, Deserialize)]
struct FlightSearchParams {
    #[serde(default = "default_origin")]
    origin: String,
    #[serde(default = "default_destination")]
    destination: String,
    #[serde(default = "default_date")]
    date: String,
    #[serde(default = "default_passengers")]
    passengers: u32,
}

fn default_origin() -> String {
    "LAXA".to_string()
}

fn default_destination() -> String {
    "LOND".to_string()
}

fn default_date() -> String {
    "2024-07-10".to_string()
}

fn default_passengers() -> u32 {
    1
}

async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<FlightSearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = FlightQuery {
        origin: params.origin,
        destination: params.destination,
        date: params.date,
        passengers: params.passengers,
    };

    let payload = state.flights.search(&query).await?;
    Ok(Json(payload))
}
