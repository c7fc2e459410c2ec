use crate::models::conductor::Conductor;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct ConductorRepository {
    pool: PgPool,
}

impl ConductorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        bus_id: i64,
        user_id: i64,
    ) -> Result<Conductor, AppError> {
        let conductor = sqlx::query_as::<_, Conductor>(
            r#"
            INSERT INTO conductors (name, bus_id, user_id, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(bus_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating conductor: {}", e)))?;

        Ok(conductor)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Conductor>, AppError> {
        let conductor = sqlx::query_as::<_, Conductor>("SELECT * FROM conductors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding conductor: {}", e)))?;

        Ok(conductor)
    }

    pub async fn find_all(&self) -> Result<Vec<Conductor>, AppError> {
        let conductors = sqlx::query_as::<_, Conductor>("SELECT * FROM conductors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing conductors: {}", e)))?;

        Ok(conductors)
    }

    // Camino único de actualización: name, bus y user se aplican juntos
    pub async fn update(
        &self,
        id: i64,
        name: String,
        bus_id: i64,
        user_id: i64,
    ) -> Result<Conductor, AppError> {
        let conductor = sqlx::query_as::<_, Conductor>(
            r#"
            UPDATE conductors
            SET name = $2, bus_id = $3, user_id = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(bus_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating conductor: {}", e)))?;

        Ok(conductor)
    }
}
