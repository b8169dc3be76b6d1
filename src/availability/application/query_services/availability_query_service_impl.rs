use std::sync::Arc;

use async_trait::async_trait;

use crate::availability::{
    domain::{
        model::{
            entities::{
                availability_check_record::AvailabilityCheckRecord,
                confirmed_booking::ConfirmedBooking,
            },
            enums::availability_domain_error::AvailabilityDomainError,
        },
        services::availability_query_service::AvailabilityQueryService,
    },
    infrastructure::persistence::repositories::{
        availability_check_log_repository::AvailabilityCheckLogRepository,
        confirmed_booking_repository::ConfirmedBookingRepository,
    },
};

const LISTING_LIMIT: i64 = 50;

pub struct AvailabilityQueryServiceImpl {
    booking_repository: Arc<dyn ConfirmedBookingRepository>,
    check_log_repository: Arc<dyn AvailabilityCheckLogRepository>,
}

impl AvailabilityQueryServiceImpl {
    pub fn new(
        booking_repository: Arc<dyn ConfirmedBookingRepository>,
        check_log_repository: Arc<dyn AvailabilityCheckLogRepository>,
    ) -> Self {
        Self {
            booking_repository,
            check_log_repository,
        }
    }
}

#[async_trait]
impl AvailabilityQueryService for AvailabilityQueryServiceImpl {
    async fn handle_list_checks(
        &self,
    ) -> Result<Vec<AvailabilityCheckRecord>, AvailabilityDomainError> {
        self.check_log_repository.list_recent(LISTING_LIMIT).await
    }

    async fn handle_list_bookings(
        &self,
    ) -> Result<Vec<ConfirmedBooking>, AvailabilityDomainError> {
        self.booking_repository.list_recent(LISTING_LIMIT).await
    }
}
