use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingListQuery, BookingResponse, CreateBookingRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/cancel", put(cancel_booking))
        .route("/user/:user_id", get(list_user_bookings))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let statuses = query.statuses.as_deref().map(parse_statuses);
    let response = controller.list(statuses).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_by_user(user_id).await?;
    Ok(Json(response))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.cancel(id).await?;
    Ok(Json(response))
}

// "confirmed, pending" -> ["CONFIRMED", "PENDING"]
fn parse_statuses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_statuses() {
        assert_eq!(
            parse_statuses("confirmed,pending"),
            vec!["CONFIRMED".to_string(), "PENDING".to_string()]
        );
        assert_eq!(
            parse_statuses(" CONFIRMED , pending "),
            vec!["CONFIRMED".to_string(), "PENDING".to_string()]
        );
        assert_eq!(parse_statuses("CANCELLED"), vec!["CANCELLED".to_string()]);
        assert!(parse_statuses("").is_empty());
        assert!(parse_statuses(" , ,").is_empty());
    }
}
