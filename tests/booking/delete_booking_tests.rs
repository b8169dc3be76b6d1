use room_booking_api::booking::domain::{
    model::{
        commands::delete_booking_command::DeleteBookingCommand,
        enums::booking_domain_error::BookingDomainError,
    },
    services::booking_command_service::BookingCommandService,
};
use uuid::Uuid;

use crate::support::{create_harness, fakes::FakeAuthorityBehavior, stored_booking};

#[tokio::test]
async fn delete_removes_the_gateway_row() {
    let existing = stored_booking();
    let harness = create_harness(vec![existing.clone()], FakeAuthorityBehavior::Available);

    harness
        .command_service
        .handle_delete(DeleteBookingCommand::new(existing.id()))
        .await
        .expect("delete should succeed");

    assert!(harness.booking_repository.bookings().is_empty());
}

#[tokio::test]
async fn delete_never_consults_the_authority() {
    // The asymmetry is deliberate: the authority's canonical booking
    // survives a gateway delete.
    let existing = stored_booking();
    let harness = create_harness(vec![existing.clone()], FakeAuthorityBehavior::Available);

    harness
        .command_service
        .handle_delete(DeleteBookingCommand::new(existing.id()))
        .await
        .expect("delete should succeed");

    assert!(harness.authority_facade.recorded_queries().is_empty());
}

#[tokio::test]
async fn deleting_an_unknown_booking_is_not_found() {
    let harness = create_harness(vec![stored_booking()], FakeAuthorityBehavior::Available);

    let error = harness
        .command_service
        .handle_delete(DeleteBookingCommand::new(Uuid::now_v7()))
        .await
        .expect_err("delete should fail");

    assert!(matches!(error, BookingDomainError::BookingNotFound));
    assert_eq!(harness.booking_repository.bookings().len(), 1);
}
