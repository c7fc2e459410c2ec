//! Modelo de Conductor
//!
//! Un conductor está asignado a un bus y vinculado a una cuenta de usuario.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Conductor - mapea exactamente a la tabla conductors
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Conductor {
    pub id: i64,
    pub name: String,
    pub bus_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
