//! Backend de reservas de autobús
//!
//! Expone los módulos de la aplicación y el router principal para que
//! el binario y los tests de integración compartan la misma app.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir la aplicación completa: routers por recurso + CORS
pub fn app(state: AppState) -> Router {
    // Sin orígenes configurados se permite cualquiera (desarrollo)
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .merge(routes::create_api_router())
        .nest("/conductors", routes::conductor_routes::create_conductor_router())
        .nest("/buses", routes::bus_routes::create_bus_router())
        .nest("/users", routes::user_routes::create_user_router())
        .nest("/bookings", routes::booking_routes::create_booking_router())
        .layer(cors)
        .with_state(state)
}
