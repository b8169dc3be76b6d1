use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::domain::model::{
    entities::room_booking::RoomBooking, enums::booking_domain_error::BookingDomainError,
};

#[async_trait]
pub trait BookingQueryService: Send + Sync {
    /// Most recent bookings, newest-created-first, capped at 50.
    async fn handle_list(&self) -> Result<Vec<RoomBooking>, BookingDomainError>;

    async fn handle_get(&self, booking_id: Uuid) -> Result<RoomBooking, BookingDomainError>;

    /// Best-effort reachability probe against the Authority; swallows all
    /// error detail.
    async fn handle_authority_probe(&self) -> bool;
}
