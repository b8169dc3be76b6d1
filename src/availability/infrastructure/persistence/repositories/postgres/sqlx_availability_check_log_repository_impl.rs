use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::availability::{
    domain::model::{
        entities::availability_check_record::AvailabilityCheckRecord,
        enums::availability_domain_error::AvailabilityDomainError,
    },
    infrastructure::persistence::repositories::availability_check_log_repository::AvailabilityCheckLogRepository,
};

pub struct SqlxAvailabilityCheckLogRepositoryImpl {
    pool: PgPool,
}

impl SqlxAvailabilityCheckLogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_record(
        row: sqlx::postgres::PgRow,
    ) -> Result<AvailabilityCheckRecord, AvailabilityDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let room: String = row.try_get("room").map_err(map_infra_error)?;
        let date: NaiveDate = row.try_get("date").map_err(map_infra_error)?;
        let time_start: NaiveTime = row.try_get("time_start").map_err(map_infra_error)?;
        let time_end: NaiveTime = row.try_get("time_end").map_err(map_infra_error)?;
        let booking_type: String = row.try_get("booking_type").map_err(map_infra_error)?;
        let result: bool = row.try_get("result").map_err(map_infra_error)?;
        let reason: String = row.try_get("reason").map_err(map_infra_error)?;
        let checked_at: DateTime<Utc> = row.try_get("checked_at").map_err(map_infra_error)?;

        Ok(AvailabilityCheckRecord::restore(
            id,
            room,
            date,
            time_start,
            time_end,
            booking_type,
            result,
            reason,
            checked_at,
        ))
    }
}

#[async_trait]
impl AvailabilityCheckLogRepository for SqlxAvailabilityCheckLogRepositoryImpl {
    async fn append(
        &self,
        check: &AvailabilityCheckRecord,
    ) -> Result<(), AvailabilityDomainError> {
        let statement = r#"
            INSERT INTO availability_checks (
                id,
                room,
                date,
                time_start,
                time_end,
                booking_type,
                result,
                reason,
                checked_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#;

        sqlx::query(statement)
            .bind(check.id())
            .bind(check.room())
            .bind(check.date())
            .bind(check.time_start())
            .bind(check.time_end())
            .bind(check.booking_type())
            .bind(check.result())
            .bind(check.reason())
            .bind(check.checked_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<AvailabilityCheckRecord>, AvailabilityDomainError> {
        let statement = r#"
            SELECT id, room, date, time_start, time_end, booking_type, result, reason, checked_at
            FROM availability_checks
            ORDER BY checked_at DESC
            LIMIT $1
        "#;

        let rows = sqlx::query(statement)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_record).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> AvailabilityDomainError {
    AvailabilityDomainError::InfrastructureError(error.to_string())
}
