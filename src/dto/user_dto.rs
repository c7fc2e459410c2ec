use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

// Request para crear un usuario
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: Option<String>,
}

// Response de usuario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
