//! Modelo de Booking
//!
//! Una reserva pertenece a un usuario y lleva un estado dentro de una
//! enumeración pequeña de estados válidos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

pub const VALID_STATUSES: [&str; 3] = [STATUS_PENDING, STATUS_CONFIRMED, STATUS_CANCELLED];

/// Booking - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub status: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Verificar que un estado pertenece a la enumeración de estados válidos
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_status() {
        assert!(is_valid_status(STATUS_PENDING));
        assert!(is_valid_status(STATUS_CONFIRMED));
        assert!(is_valid_status(STATUS_CANCELLED));
        assert!(!is_valid_status("pending"));
        assert!(!is_valid_status("UNKNOWN"));
        assert!(!is_valid_status(""));
    }
}
