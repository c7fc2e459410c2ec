use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::bus::Bus;

// Request para registrar un bus
#[derive(Debug, Deserialize)]
pub struct CreateBusRequest {
    pub bus_number: String,
    pub bus_type: String,
    pub total_seats: i32,
}

// Response de bus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusResponse {
    pub id: i64,
    pub bus_number: String,
    pub bus_type: String,
    pub total_seats: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Bus> for BusResponse {
    fn from(bus: Bus) -> Self {
        Self {
            id: bus.id,
            bus_number: bus.bus_number,
            bus_type: bus.bus_type,
            total_seats: bus.total_seats,
            created_at: bus.created_at,
        }
    }
}
