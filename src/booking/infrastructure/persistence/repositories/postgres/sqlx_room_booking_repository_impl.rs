use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::booking::{
    domain::model::{
        entities::room_booking::RoomBooking, enums::booking_domain_error::BookingDomainError,
    },
    infrastructure::persistence::repositories::room_booking_repository::RoomBookingRepository,
};

pub struct SqlxRoomBookingRepositoryImpl {
    pool: PgPool,
}

impl SqlxRoomBookingRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<RoomBooking, BookingDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let room: String = row.try_get("room").map_err(map_infra_error)?;
        let date: NaiveDate = row.try_get("date").map_err(map_infra_error)?;
        let time_start: NaiveTime = row.try_get("time_start").map_err(map_infra_error)?;
        let time_end: NaiveTime = row.try_get("time_end").map_err(map_infra_error)?;
        let booking_type: String = row.try_get("booking_type").map_err(map_infra_error)?;
        let user_email: String = row.try_get("user_email").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        Ok(RoomBooking::restore(
            id,
            room,
            date,
            time_start,
            time_end,
            booking_type,
            user_email,
            created_at,
        ))
    }
}

#[async_trait]
impl RoomBookingRepository for SqlxRoomBookingRepositoryImpl {
    async fn save(&self, booking: &RoomBooking) -> Result<(), BookingDomainError> {
        let statement = r#"
            INSERT INTO room_bookings (id, room, date, time_start, time_end, booking_type, user_email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(statement)
            .bind(booking.id())
            .bind(booking.room())
            .bind(booking.date())
            .bind(booking.time_start())
            .bind(booking.time_end())
            .bind(booking.booking_type())
            .bind(booking.user_email())
            .bind(booking.created_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn update(&self, booking: &RoomBooking) -> Result<(), BookingDomainError> {
        let statement = r#"
            UPDATE room_bookings
            SET room = $2,
                date = $3,
                time_start = $4,
                time_end = $5,
                booking_type = $6,
                user_email = $7
            WHERE id = $1
        "#;

        sqlx::query(statement)
            .bind(booking.id())
            .bind(booking.room())
            .bind(booking.date())
            .bind(booking.time_start())
            .bind(booking.time_end())
            .bind(booking.booking_type())
            .bind(booking.user_email())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<RoomBooking>, BookingDomainError> {
        let statement = r#"
            SELECT id, room, date, time_start, time_end, booking_type, user_email, created_at
            FROM room_bookings
            WHERE id = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn delete(&self, booking_id: Uuid) -> Result<bool, BookingDomainError> {
        let statement = r#"
            DELETE FROM room_bookings
            WHERE id = $1
        "#;

        let result = sqlx::query(statement)
            .bind(booking_id)
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<RoomBooking>, BookingDomainError> {
        let statement = r#"
            SELECT id, room, date, time_start, time_end, booking_type, user_email, created_at
            FROM room_bookings
            ORDER BY created_at DESC
            LIMIT $1
        "#;

        let rows = sqlx::query(statement)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> BookingDomainError {
    BookingDomainError::InfrastructureError(error.to_string())
}
