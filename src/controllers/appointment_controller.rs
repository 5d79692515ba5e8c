use crate::database::acquire;
use crate::dto::appointment_dto::{AppointmentRequest, AppointmentResponse};
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

const RESOURCE: &str = "Appointment";

/// Operaciones CRUD de citas.
///
/// Cada operación adquiere una sola conexión del pool; la conexión vuelve
/// al pool al salir del método, también cuando hay error.
pub struct AppointmentController {
    pool: PgPool,
}

impl AppointmentController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<AppointmentResponse>> {
        let mut conn = acquire(&self.pool).await?;
        let appointments = AppointmentRepository::new(&mut conn).list().await?;
        debug!("📋 {} citas listadas", appointments.len());

        Ok(appointments.into_iter().map(AppointmentResponse::from).collect())
    }

    pub async fn get_by_id(&self, raw_id: &str) -> AppResult<AppointmentResponse> {
        let id = parse_id(raw_id)?;
        let mut conn = acquire(&self.pool).await?;
        let appointment = AppointmentRepository::new(&mut conn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(RESOURCE, raw_id))?;

        Ok(appointment.into())
    }

    pub async fn create(&self, request: AppointmentRequest) -> AppResult<AppointmentResponse> {
        // Validar antes de tocar la base de datos
        let fields = request.to_fields()?;

        let mut conn = acquire(&self.pool).await?;
        let appointment = AppointmentRepository::new(&mut conn).create(&fields).await?;
        info!("✅ Cita creada {} ({} {})", appointment.id, appointment.plate, appointment.service);

        Ok(appointment.into())
    }

    /// Reemplazo completo: los campos ausentes se normalizan igual que en la creación
    pub async fn update(&self, raw_id: &str, request: AppointmentRequest) -> AppResult<AppointmentResponse> {
        let id = require_id(raw_id)?;
        let fields = request.to_fields()?;
        let id = id.ok_or_else(|| not_found_error(RESOURCE, raw_id))?;

        let mut conn = acquire(&self.pool).await?;
        let appointment = AppointmentRepository::new(&mut conn)
            .update(id, &fields)
            .await?
            .ok_or_else(|| not_found_error(RESOURCE, raw_id))?;
        info!("✏️ Cita actualizada {}", appointment.id);

        Ok(appointment.into())
    }

    pub async fn delete(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_id(raw_id)?;
        let mut conn = acquire(&self.pool).await?;
        let deleted = AppointmentRepository::new(&mut conn).delete(id).await?;
        if !deleted {
            return Err(not_found_error(RESOURCE, raw_id));
        }
        info!("🗑️ Cita eliminada {}", id);

        Ok(())
    }
}

/// Id obligatorio; un id que no es UUID no puede existir en la tabla
fn require_id(raw_id: &str) -> AppResult<Option<Uuid>> {
    let raw_id = raw_id.trim();
    if raw_id.is_empty() {
        return Err(bad_request_error("Appointment id is required"));
    }
    Ok(Uuid::parse_str(raw_id).ok())
}

fn parse_id(raw_id: &str) -> AppResult<Uuid> {
    require_id(raw_id)?.ok_or_else(|| not_found_error(RESOURCE, raw_id))
}
