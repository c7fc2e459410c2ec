use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::conductor::Conductor;

// Request para crear un conductor
#[derive(Debug, Deserialize)]
pub struct CreateConductorRequest {
    pub name: String,
    pub bus_id: i64,
    pub user_id: i64,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize)]
pub struct UpdateConductorRequest {
    pub name: String,
    pub bus_id: i64,
    pub user_id: i64,
}

// Response de conductor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConductorResponse {
    pub id: i64,
    pub name: String,
    pub bus_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Conductor> for ConductorResponse {
    fn from(conductor: Conductor) -> Self {
        Self {
            id: conductor.id,
            name: conductor.name,
            bus_id: conductor.bus_id,
            user_id: conductor.user_id,
            created_at: conductor.created_at,
        }
    }
}
