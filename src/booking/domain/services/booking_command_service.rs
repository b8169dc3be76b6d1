use async_trait::async_trait;

use crate::booking::domain::model::{
    commands::{
        create_booking_command::CreateBookingCommand,
        delete_booking_command::DeleteBookingCommand,
        update_booking_command::UpdateBookingCommand,
    },
    entities::room_booking::RoomBooking,
    enums::booking_domain_error::BookingDomainError,
};

#[async_trait]
pub trait BookingCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateBookingCommand,
    ) -> Result<RoomBooking, BookingDomainError>;

    async fn handle_update(
        &self,
        command: UpdateBookingCommand,
    ) -> Result<RoomBooking, BookingDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteBookingCommand,
    ) -> Result<(), BookingDomainError>;
}
