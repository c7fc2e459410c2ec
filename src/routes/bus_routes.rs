use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::bus_controller::BusController;
use crate::dto::bus_dto::{BusResponse, CreateBusRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bus_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_bus))
        .route("/", get(list_buses))
        .route("/:id", get(get_bus))
}

async fn create_bus(
    State(state): State<AppState>,
    Json(request): Json<CreateBusRequest>,
) -> Result<(StatusCode, Json<BusResponse>), AppError> {
    let controller = BusController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_buses(State(state): State<AppState>) -> Result<Json<Vec<BusResponse>>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let response = controller.get_all().await?;
    Ok(Json(response))
}

async fn get_bus(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BusResponse>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
