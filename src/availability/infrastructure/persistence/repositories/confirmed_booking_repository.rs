use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::availability::domain::model::{
    entities::confirmed_booking::ConfirmedBooking,
    enums::availability_domain_error::AvailabilityDomainError,
};

#[async_trait]
pub trait ConfirmedBookingRepository: Send + Sync {
    async fn save(&self, booking: &ConfirmedBooking) -> Result<(), AvailabilityDomainError>;

    /// Count of confirmed bookings on the same room and date whose interval
    /// overlaps the proposed one as an open interval: touching endpoints do
    /// not conflict.
    async fn count_overlapping(
        &self,
        room: &str,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
    ) -> Result<i64, AvailabilityDomainError>;

    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<ConfirmedBooking>, AvailabilityDomainError>;
}
