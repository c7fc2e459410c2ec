use crate::dto::bus_dto::{BusResponse, CreateBusRequest};
use crate::repositories::bus_repository::BusRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use tracing::{info, warn};

pub struct BusController {
    repository: BusRepository,
}

impl BusController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BusRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBusRequest) -> Result<BusResponse, AppError> {
        info!("Registrando bus: {}", request.bus_number);

        let bus = self
            .repository
            .create(request.bus_number, request.bus_type, request.total_seats)
            .await?;

        info!("Bus registrado exitosamente con id: {}", bus.id);
        Ok(BusResponse::from(bus))
    }

    pub async fn get_all(&self) -> Result<Vec<BusResponse>, AppError> {
        let buses = self.repository.find_all().await?;
        Ok(buses.into_iter().map(BusResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<BusResponse, AppError> {
        let bus = match self.repository.find_by_id(id).await? {
            Some(bus) => bus,
            None => {
                warn!("Bus con id {} no encontrado", id);
                return Err(not_found_error("Bus", id));
            }
        };

        Ok(BusResponse::from(bus))
    }
}
