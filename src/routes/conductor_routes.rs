use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::conductor_controller::ConductorController;
use crate::dto::conductor_dto::{
    ConductorResponse, CreateConductorRequest, UpdateConductorRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_conductor_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_conductor))
        .route("/", get(list_conductors))
        .route("/:id", get(get_conductor))
        .route("/:id", put(update_conductor))
}

fn controller(state: &AppState) -> ConductorController {
    ConductorController::new(
        state.pool.clone(),
        state.config.invalid_reference_as_not_found,
    )
}

async fn create_conductor(
    State(state): State<AppState>,
    Json(request): Json<CreateConductorRequest>,
) -> Result<(StatusCode, Json<ConductorResponse>), AppError> {
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_conductors(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConductorResponse>>, AppError> {
    let response = controller(&state).get_all().await?;
    Ok(Json(response))
}

async fn get_conductor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ConductorResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_conductor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateConductorRequest>,
) -> Result<Json<ConductorResponse>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}
