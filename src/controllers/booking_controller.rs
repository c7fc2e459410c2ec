//! Operaciones sobre reservas
//!
//! Expone las consultas derivadas (por conjunto de estados, por usuario)
//! y la transición de cancelación.

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest};
use crate::models::booking::{is_valid_status, STATUS_CANCELLED, STATUS_PENDING};
use crate::repositories::booking_repository::BookingRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use tracing::{info, warn};

pub struct BookingController {
    repository: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> Result<BookingResponse, AppError> {
        let status = request
            .status
            .unwrap_or_else(|| STATUS_PENDING.to_string());

        if !is_valid_status(&status) {
            return Err(AppError::BadRequest(format!(
                "Estado de reserva desconocido: '{}'",
                status
            )));
        }

        info!("Creando reserva para usuario {} con estado {}", request.user_id, status);

        let booking = self.repository.create(request.user_id, status).await?;

        info!("Reserva creada exitosamente con id: {}", booking.id);
        Ok(BookingResponse::from(booking))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<BookingResponse, AppError> {
        let booking = match self.repository.find_by_id(id).await? {
            Some(booking) => booking,
            None => {
                warn!("Reserva con id {} no encontrada", id);
                return Err(not_found_error("Booking", id));
            }
        };

        Ok(BookingResponse::from(booking))
    }

    /// Listar reservas; con filtro, solo las que pertenecen al conjunto de estados
    pub async fn list(&self, statuses: Option<Vec<String>>) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = match statuses {
            Some(statuses) if !statuses.is_empty() => {
                info!("Listando reservas con estados: {:?}", statuses);
                self.repository.find_all_by_status_in(&statuses).await?
            }
            _ => self.repository.find_all().await?,
        };

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<BookingResponse>, AppError> {
        info!("Listando reservas del usuario {}", user_id);

        let bookings = self.repository.find_by_user(user_id).await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn cancel(&self, id: i64) -> Result<BookingResponse, AppError> {
        info!("Cancelando reserva con id: {}", id);

        if self.repository.find_by_id(id).await?.is_none() {
            warn!("Reserva con id {} no encontrada", id);
            return Err(not_found_error("Booking", id));
        }

        let booking = self
            .repository
            .update_status(id, STATUS_CANCELLED.to_string())
            .await?;

        info!("Reserva {} cancelada", booking.id);
        Ok(BookingResponse::from(booking))
    }
}
