use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::{
    domain::{
        model::{
            entities::room_booking::RoomBooking,
            enums::booking_domain_error::BookingDomainError,
        },
        services::booking_query_service::BookingQueryService,
    },
    infrastructure::persistence::repositories::room_booking_repository::RoomBookingRepository,
    interfaces::acl::availability_authority_facade::AvailabilityAuthorityFacade,
};

const LISTING_LIMIT: i64 = 50;

pub struct BookingQueryServiceImpl {
    booking_repository: Arc<dyn RoomBookingRepository>,
    authority_facade: Arc<dyn AvailabilityAuthorityFacade>,
}

impl BookingQueryServiceImpl {
    pub fn new(
        booking_repository: Arc<dyn RoomBookingRepository>,
        authority_facade: Arc<dyn AvailabilityAuthorityFacade>,
    ) -> Self {
        Self {
            booking_repository,
            authority_facade,
        }
    }
}

#[async_trait]
impl BookingQueryService for BookingQueryServiceImpl {
    async fn handle_list(&self) -> Result<Vec<RoomBooking>, BookingDomainError> {
        self.booking_repository.list_recent(LISTING_LIMIT).await
    }

    async fn handle_get(&self, booking_id: Uuid) -> Result<RoomBooking, BookingDomainError> {
        self.booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingDomainError::BookingNotFound)
    }

    async fn handle_authority_probe(&self) -> bool {
        self.authority_facade.probe_health().await
    }
}
