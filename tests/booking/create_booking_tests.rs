use room_booking_api::booking::domain::{
    model::{
        commands::create_booking_command::CreateBookingCommand,
        enums::booking_domain_error::BookingDomainError,
    },
    services::booking_command_service::BookingCommandService,
};

use crate::support::{create_command, create_harness, fakes::FakeAuthorityBehavior};

#[tokio::test]
async fn grant_persists_exactly_one_booking_with_all_fields() {
    let harness = create_harness(vec![], FakeAuthorityBehavior::Available);

    let booking = harness
        .command_service
        .handle_create(create_command())
        .await
        .expect("create should succeed");

    assert_eq!(booking.room(), "101");
    assert_eq!(booking.booking_type(), "lesson");
    assert_eq!(booking.user_email(), "user@example.com");

    let stored = harness.booking_repository.bookings();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], booking);
}

#[tokio::test]
async fn the_query_sent_upstream_carries_the_raw_request_fields() {
    let harness = create_harness(vec![], FakeAuthorityBehavior::Available);

    harness
        .command_service
        .handle_create(create_command())
        .await
        .expect("create should succeed");

    let queries = harness.authority_facade.recorded_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].room, "101");
    assert_eq!(queries[0].date, "2024-03-01");
    assert_eq!(queries[0].time_start, "09:00");
    assert_eq!(queries[0].time_end, "10:00");
    assert_eq!(queries[0].booking_type, "lesson");
}

#[tokio::test]
async fn denial_persists_nothing_and_propagates_the_reason_verbatim() {
    let reason = "room is occupied at this time; conflicts: 1";
    let harness = create_harness(
        vec![],
        FakeAuthorityBehavior::Denied(reason.to_string()),
    );

    let error = harness
        .command_service
        .handle_create(create_command())
        .await
        .expect_err("create should be denied");

    match error {
        BookingDomainError::SlotUnavailable(propagated) => assert_eq!(propagated, reason),
        other => panic!("expected slot denial, got {other:?}"),
    }
    assert!(harness.booking_repository.bookings().is_empty());
}

#[tokio::test]
async fn timeout_is_a_distinct_upstream_failure() {
    let harness = create_harness(vec![], FakeAuthorityBehavior::Timeout);

    let error = harness
        .command_service
        .handle_create(create_command())
        .await
        .expect_err("create should fail");

    assert!(matches!(error, BookingDomainError::AuthorityTimeout));
    assert!(harness.booking_repository.bookings().is_empty());
}

#[tokio::test]
async fn connection_failure_is_a_distinct_upstream_failure() {
    let harness = create_harness(vec![], FakeAuthorityBehavior::ConnectionRefused);

    let error = harness
        .command_service
        .handle_create(create_command())
        .await
        .expect_err("create should fail");

    assert!(matches!(error, BookingDomainError::AuthorityUnreachable));
}

#[tokio::test]
async fn non_success_upstream_status_surfaces_the_body_for_diagnostics() {
    let harness = create_harness(
        vec![],
        FakeAuthorityBehavior::UpstreamError {
            status: 400,
            body: "{\"available\":false}".to_string(),
        },
    );

    let error = harness
        .command_service
        .handle_create(create_command())
        .await
        .expect_err("create should fail");

    match error {
        BookingDomainError::AuthorityUpstreamError { details } => {
            assert_eq!(details, "{\"available\":false}");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn a_missing_field_rejects_the_command_outright() {
    let result = CreateBookingCommand::new(
        Some("101".to_string()),
        Some("2024-03-01".to_string()),
        None,
        Some("10:00".to_string()),
        Some("lesson".to_string()),
        Some("user@example.com".to_string()),
    );

    assert!(matches!(result, Err(BookingDomainError::MissingFields)));
}

#[tokio::test]
async fn an_empty_field_counts_as_missing() {
    let result = CreateBookingCommand::new(
        Some("101".to_string()),
        Some("2024-03-01".to_string()),
        Some("09:00".to_string()),
        Some("10:00".to_string()),
        Some("lesson".to_string()),
        Some(String::new()),
    );

    assert!(matches!(result, Err(BookingDomainError::MissingFields)));
}
