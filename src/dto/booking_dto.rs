use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::booking::Booking;

// Request para crear una reserva; sin estado explícito queda en PENDING
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: i64,
    pub status: Option<String>,
}

// Filtro de listado: ?statuses=CONFIRMED,PENDING
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub statuses: Option<String>,
}

// Response de reserva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    pub status: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            status: booking.status,
            user_id: booking.user_id,
            created_at: booking.created_at,
        }
    }
}
