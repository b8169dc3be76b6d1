use std::sync::Arc;

use room_booking_api::booking::{
    application::{
        command_services::booking_command_service_impl::BookingCommandServiceImpl,
        query_services::booking_query_service_impl::BookingQueryServiceImpl,
    },
    domain::model::entities::room_booking::RoomBooking,
};

use super::fakes::{
    FakeAuthorityBehavior, FakeAvailabilityAuthorityFacade, FakeRoomBookingRepository,
};

pub struct BookingTestHarness {
    pub booking_repository: Arc<FakeRoomBookingRepository>,
    pub authority_facade: Arc<FakeAvailabilityAuthorityFacade>,
    pub command_service: BookingCommandServiceImpl,
    pub query_service: BookingQueryServiceImpl,
}

pub fn create_harness(
    existing: Vec<RoomBooking>,
    behavior: FakeAuthorityBehavior,
) -> BookingTestHarness {
    let booking_repository = Arc::new(FakeRoomBookingRepository::with_bookings(existing));
    let authority_facade = Arc::new(FakeAvailabilityAuthorityFacade::new(behavior));

    let command_service = BookingCommandServiceImpl::new(
        booking_repository.clone(),
        authority_facade.clone(),
    );
    let query_service = BookingQueryServiceImpl::new(
        booking_repository.clone(),
        authority_facade.clone(),
    );

    BookingTestHarness {
        booking_repository,
        authority_facade,
        command_service,
        query_service,
    }
}
