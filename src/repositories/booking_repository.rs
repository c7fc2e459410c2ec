//! Repositorio de reservas
//!
//! Además del CRUD básico declara las consultas derivadas del sistema:
//! filtrado por conjunto de estados y por usuario propietario.

use crate::models::booking::Booking;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, status: String) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (status, user_id, created_at)
            VALUES ($1, $2, NOW())
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    /// Reservas cuyo estado pertenece al conjunto dado, en orden de almacenamiento
    pub async fn find_all_by_status_in(&self, statuses: &[String]) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE status = ANY($1) ORDER BY id",
        )
        .bind(statuses.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing bookings by status: {}", e)))?;

        Ok(bookings)
    }

    /// Reservas pertenecientes a un usuario, en orden de almacenamiento
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing bookings by user: {}", e)))?;

        Ok(bookings)
    }

    pub async fn update_status(&self, id: i64, status: String) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating booking status: {}", e)))?;

        Ok(booking)
    }
}
