use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use room_booking_api::booking::domain::{
    model::{
        entities::room_booking::RoomBooking,
        enums::booking_domain_error::BookingDomainError,
    },
    services::booking_query_service::BookingQueryService,
};
use uuid::Uuid;

use crate::support::{create_harness, fakes::FakeAuthorityBehavior, stored_booking};

#[tokio::test]
async fn get_returns_the_stored_booking() {
    let existing = stored_booking();
    let harness = create_harness(vec![existing.clone()], FakeAuthorityBehavior::Available);

    let found = harness
        .query_service
        .handle_get(existing.id())
        .await
        .expect("booking should be found");

    assert_eq!(found, existing);
}

#[tokio::test]
async fn get_for_an_unknown_id_is_not_found() {
    let harness = create_harness(vec![stored_booking()], FakeAuthorityBehavior::Available);

    let error = harness
        .query_service
        .handle_get(Uuid::now_v7())
        .await
        .expect_err("lookup should fail");

    assert!(matches!(error, BookingDomainError::BookingNotFound));
}

#[tokio::test]
async fn listing_is_newest_first_and_capped_at_50() {
    let base = Utc::now();
    let bookings: Vec<RoomBooking> = (0..55)
        .map(|index| {
            RoomBooking::restore(
                Uuid::now_v7(),
                format!("room-{index}"),
                NaiveDate::parse_from_str("2024-03-01", "%Y-%m-%d").expect("valid fixture date"),
                NaiveTime::parse_from_str("09:00", "%H:%M").expect("valid fixture time"),
                NaiveTime::parse_from_str("10:00", "%H:%M").expect("valid fixture time"),
                "lesson".to_string(),
                "user@example.com".to_string(),
                base + Duration::minutes(index),
            )
        })
        .collect();

    let harness = create_harness(bookings, FakeAuthorityBehavior::Available);

    let listed = harness
        .query_service
        .handle_list()
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 50);
    assert_eq!(listed[0].room(), "room-54");
}

#[tokio::test]
async fn authority_probe_reports_a_healthy_upstream() {
    let harness = create_harness(vec![], FakeAuthorityBehavior::Available);

    assert!(harness.query_service.handle_authority_probe().await);
}

#[tokio::test]
async fn authority_probe_swallows_upstream_failures() {
    let harness = create_harness(vec![], FakeAuthorityBehavior::ConnectionRefused);

    assert!(!harness.query_service.handle_authority_probe().await);
}
