use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use wayfare_core::models::City;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cities", get(list_cities))
        .route("/cities/search/{name}", get(search_cities))
}

async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<City>>, AppError> {
    let cities = state.cities.list_all().await?;
    Ok(Json(cities))
}

async fn search_cities(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<City>>, AppError> {
    let cities = state.cities.search_by_name(&name).await?;
    Ok(Json(cities))
}
