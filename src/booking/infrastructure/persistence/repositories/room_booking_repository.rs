use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::domain::model::{
    entities::room_booking::RoomBooking, enums::booking_domain_error::BookingDomainError,
};

#[async_trait]
pub trait RoomBookingRepository: Send + Sync {
    async fn save(&self, booking: &RoomBooking) -> Result<(), BookingDomainError>;

    async fn update(&self, booking: &RoomBooking) -> Result<(), BookingDomainError>;

    async fn find_by_id(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<RoomBooking>, BookingDomainError>;

    /// Returns false when no row matched the id.
    async fn delete(&self, booking_id: Uuid) -> Result<bool, BookingDomainError>;

    async fn list_recent(&self, limit: i64) -> Result<Vec<RoomBooking>, BookingDomainError>;
}
