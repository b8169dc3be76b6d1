use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::availability::{
    domain::model::{
        entities::confirmed_booking::ConfirmedBooking,
        enums::{
            availability_domain_error::AvailabilityDomainError, booking_type::BookingType,
        },
    },
    infrastructure::persistence::repositories::confirmed_booking_repository::ConfirmedBookingRepository,
};

pub struct SqlxConfirmedBookingRepositoryImpl {
    pool: PgPool,
}

impl SqlxConfirmedBookingRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(
        row: sqlx::postgres::PgRow,
    ) -> Result<ConfirmedBooking, AvailabilityDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let room: String = row.try_get("room").map_err(map_infra_error)?;
        let date: NaiveDate = row.try_get("date").map_err(map_infra_error)?;
        let time_start: NaiveTime = row.try_get("time_start").map_err(map_infra_error)?;
        let time_end: NaiveTime = row.try_get("time_end").map_err(map_infra_error)?;
        let booking_type_raw: String = row.try_get("booking_type").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        let booking_type = BookingType::from_str(&booking_type_raw).map_err(|_| {
            AvailabilityDomainError::InfrastructureError("unknown booking type stored".to_string())
        })?;

        Ok(ConfirmedBooking::restore(
            id,
            room,
            date,
            time_start,
            time_end,
            booking_type,
            created_at,
        ))
    }
}

#[async_trait]
impl ConfirmedBookingRepository for SqlxConfirmedBookingRepositoryImpl {
    async fn save(&self, booking: &ConfirmedBooking) -> Result<(), AvailabilityDomainError> {
        let statement = r#"
            INSERT INTO confirmed_bookings (id, room, date, time_start, time_end, booking_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(statement)
            .bind(booking.id())
            .bind(booking.room())
            .bind(booking.date())
            .bind(booking.time_start())
            .bind(booking.time_end())
            .bind(booking.booking_type().as_str())
            .bind(booking.created_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn count_overlapping(
        &self,
        room: &str,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
    ) -> Result<i64, AvailabilityDomainError> {
        let statement = r#"
            SELECT COUNT(*) AS conflicts
            FROM confirmed_bookings
            WHERE room = $1
              AND date = $2
              AND time_start < $3
              AND time_end > $4
        "#;

        let row = sqlx::query(statement)
            .bind(room)
            .bind(date)
            .bind(time_end)
            .bind(time_start)
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        row.try_get("conflicts").map_err(map_infra_error)
    }

    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<ConfirmedBooking>, AvailabilityDomainError> {
        let statement = r#"
            SELECT id, room, date, time_start, time_end, booking_type, created_at
            FROM confirmed_bookings
            ORDER BY created_at
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

fn map_infra_error(error: sqlx::Error) -> AvailabilityDomainError {
    AvailabilityDomainError::InfrastructureError(error.to_string())
}
