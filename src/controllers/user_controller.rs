use crate::dto::user_dto::{CreateUserRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use tracing::{info, warn};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        info!("Creando usuario: {}", request.full_name);

        let user = self
            .repository
            .create(request.full_name, request.email)
            .await?;

        info!("Usuario creado exitosamente con id: {}", user.id);
        Ok(UserResponse::from(user))
    }

    pub async fn get_all(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = match self.repository.find_by_id(id).await? {
            Some(user) => user,
            None => {
                warn!("Usuario con id {} no encontrado", id);
                return Err(not_found_error("User", id));
            }
        };

        Ok(UserResponse::from(user))
    }
}
