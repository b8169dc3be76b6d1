use async_trait::async_trait;

use crate::availability::domain::model::{
    entities::{
        availability_check_record::AvailabilityCheckRecord,
        confirmed_booking::ConfirmedBooking,
    },
    enums::availability_domain_error::AvailabilityDomainError,
};

#[async_trait]
pub trait AvailabilityQueryService: Send + Sync {
    /// Most recent audit rows, newest first, capped at 50.
    async fn handle_list_checks(
        &self,
    ) -> Result<Vec<AvailabilityCheckRecord>, AvailabilityDomainError>;

    /// Canonical bookings, capped at 50.
    async fn handle_list_bookings(
        &self,
    ) -> Result<Vec<ConfirmedBooking>, AvailabilityDomainError>;
}
