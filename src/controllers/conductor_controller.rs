//! Operaciones sobre conductores
//!
//! Un conductor referencia un bus y un usuario existentes. La actualización
//! resuelve ambas referencias de forma explícita antes de aplicar el único
//! camino de escritura.

use crate::dto::conductor_dto::{
    ConductorResponse, CreateConductorRequest, UpdateConductorRequest,
};
use crate::repositories::bus_repository::BusRepository;
use crate::repositories::conductor_repository::ConductorRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{invalid_reference_error, not_found_error, AppError};
use sqlx::PgPool;
use tracing::{info, warn};

pub struct ConductorController {
    conductors: ConductorRepository,
    buses: BusRepository,
    users: UserRepository,
    invalid_reference_as_not_found: bool,
}

impl ConductorController {
    pub fn new(pool: PgPool, invalid_reference_as_not_found: bool) -> Self {
        Self {
            conductors: ConductorRepository::new(pool.clone()),
            buses: BusRepository::new(pool.clone()),
            users: UserRepository::new(pool),
            invalid_reference_as_not_found,
        }
    }

    // La existencia de bus/user referenciados no se valida al crear;
    // las claves foráneas de la base de datos son la única garantía
    pub async fn create(
        &self,
        request: CreateConductorRequest,
    ) -> Result<ConductorResponse, AppError> {
        info!("Creando conductor: {}", request.name);

        let conductor = self
            .conductors
            .create(request.name, request.bus_id, request.user_id)
            .await?;

        info!("Conductor creado exitosamente con id: {}", conductor.id);
        Ok(ConductorResponse::from(conductor))
    }

    pub async fn get_all(&self) -> Result<Vec<ConductorResponse>, AppError> {
        info!("Recuperando todos los conductores");

        let conductors = self.conductors.find_all().await?;

        info!("Recuperados {} conductores", conductors.len());
        Ok(conductors.into_iter().map(ConductorResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ConductorResponse, AppError> {
        info!("Recuperando conductor con id: {}", id);

        let conductor = match self.conductors.find_by_id(id).await? {
            Some(conductor) => conductor,
            None => {
                warn!("Conductor con id {} no encontrado", id);
                return Err(not_found_error("Conductor", id));
            }
        };

        Ok(ConductorResponse::from(conductor))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateConductorRequest,
    ) -> Result<ConductorResponse, AppError> {
        info!("Actualizando conductor con id: {}", id);

        if self.conductors.find_by_id(id).await?.is_none() {
            warn!("Conductor con id {} no encontrado", id);
            return Err(not_found_error("Conductor", id));
        }

        if self.buses.find_by_id(request.bus_id).await?.is_none() {
            warn!("Bus referenciado con id {} no existe", request.bus_id);
            return Err(invalid_reference_error(
                "Bus",
                request.bus_id,
                self.invalid_reference_as_not_found,
            ));
        }

        if self.users.find_by_id(request.user_id).await?.is_none() {
            warn!("User referenciado con id {} no existe", request.user_id);
            return Err(invalid_reference_error(
                "User",
                request.user_id,
                self.invalid_reference_as_not_found,
            ));
        }

        let conductor = self
            .conductors
            .update(id, request.name, request.bus_id, request.user_id)
            .await?;

        info!("Conductor actualizado: {}", conductor.id);
        Ok(ConductorResponse::from(conductor))
    }
}
