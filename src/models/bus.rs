use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Bus - mapea exactamente a la tabla buses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bus {
    pub id: i64,
    pub bus_number: String,
    pub bus_type: String,
    pub total_seats: i32,
    pub created_at: DateTime<Utc>,
}
