use crate::models::user::User;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, full_name: String, email: Option<String>) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, created_at)
            VALUES ($1, $2, NOW())
            RETURNING *
            "#,
        )
        .bind(full_name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating user: {}", e)))?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding user: {}", e)))?;

        Ok(user)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing users: {}", e)))?;

        Ok(users)
    }
}
