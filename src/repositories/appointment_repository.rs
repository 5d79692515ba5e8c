use crate::dto::appointment_dto::AppointmentFields;
use crate::models::appointment::Appointment;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, date, period, plate, car, service, locality, status, notes, extra, sort_index, created_at, updated_at";

/// Acceso a la tabla appointments sobre una conexión ya adquirida.
///
/// Cada método ejecuta exactamente una sentencia SQL.
pub struct AppointmentRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> AppointmentRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&mut self) -> Result<Vec<Appointment>, AppError> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments \
             ORDER BY date ASC NULLS LAST, period ASC, sort_index ASC, created_at ASC"
        );
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(appointments)
    }

    pub async fn find_by_id(&mut self, id: Uuid) -> Result<Option<Appointment>, AppError> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(appointment)
    }

    pub async fn create(&mut self, fields: &AppointmentFields) -> Result<Appointment, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let query = format!(
            r#"
            INSERT INTO appointments
                (id, date, period, plate, car, service, locality, status, notes, extra, sort_index, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
            RETURNING {COLUMNS}
            "#
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(fields.date)
            .bind(fields.period.map(|period| period.as_str()))
            .bind(&fields.plate)
            .bind(&fields.car)
            .bind(fields.service.as_str())
            .bind(&fields.locality)
            .bind(fields.status.as_str())
            .bind(&fields.notes)
            .bind(&fields.extra)
            .bind(fields.sort_index)
            .bind(now)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(appointment)
    }

    /// Reemplazar todos los campos mutables. `None` si el id no existe.
    pub async fn update(
        &mut self,
        id: Uuid,
        fields: &AppointmentFields,
    ) -> Result<Option<Appointment>, AppError> {
        let query = format!(
            r#"
            UPDATE appointments
            SET date = $2, period = $3, plate = $4, car = $5, service = $6, locality = $7,
                status = $8, notes = $9, extra = $10, sort_index = $11, updated_at = $12
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(fields.date)
            .bind(fields.period.map(|period| period.as_str()))
            .bind(&fields.plate)
            .bind(&fields.car)
            .bind(fields.service.as_str())
            .bind(&fields.locality)
            .bind(fields.status.as_str())
            .bind(&fields.notes)
            .bind(&fields.extra)
            .bind(fields.sort_index)
            .bind(Utc::now())
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(appointment)
    }

    /// Devuelve `false` si no había ninguna fila con ese id
    pub async fn delete(&mut self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
