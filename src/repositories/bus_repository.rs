use crate::models::bus::Bus;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct BusRepository {
    pool: PgPool,
}

impl BusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        bus_number: String,
        bus_type: String,
        total_seats: i32,
    ) -> Result<Bus, AppError> {
        let bus = sqlx::query_as::<_, Bus>(
            r#"
            INSERT INTO buses (bus_number, bus_type, total_seats, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING *
            "#,
        )
        .bind(bus_number)
        .bind(bus_type)
        .bind(total_seats)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating bus: {}", e)))?;

        Ok(bus)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Bus>, AppError> {
        let bus = sqlx::query_as::<_, Bus>("SELECT * FROM buses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding bus: {}", e)))?;

        Ok(bus)
    }

    pub async fn find_all(&self) -> Result<Vec<Bus>, AppError> {
        let buses = sqlx::query_as::<_, Bus>("SELECT * FROM buses ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing buses: {}", e)))?;

        Ok(buses)
    }
}
