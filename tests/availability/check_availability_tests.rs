use room_booking_api::availability::domain::{
    model::{
        commands::check_availability_command::CheckAvailabilityCommand,
        enums::availability_decision::AvailabilityDecision,
    },
    services::availability_command_service::AvailabilityCommandService,
};

use crate::support::{check_command, confirmed_booking, create_harness, lesson_command};

#[tokio::test]
async fn grant_on_empty_state_creates_booking_and_audit_row() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(lesson_command())
        .await
        .expect("check should succeed");

    assert_eq!(
        decision,
        AvailabilityDecision::Granted {
            message: "room is available for booking".to_string(),
        }
    );

    let bookings = harness.booking_repository.bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].room(), "101");

    let checks = harness.check_log_repository.appended();
    assert_eq!(checks.len(), 1);
    assert!(checks[0].result());
    assert_eq!(checks[0].reason(), "room is available");
}

#[tokio::test]
async fn repeating_the_identical_request_is_denied_with_conflict_count() {
    let harness = create_harness(vec![]);

    harness
        .service
        .handle_check(lesson_command())
        .await
        .expect("first check should succeed");
    let decision = harness
        .service
        .handle_check(lesson_command())
        .await
        .expect("second check should still be evaluated");

    match decision {
        AvailabilityDecision::Denied { reason } => {
            assert!(reason.contains("conflicts: 1"), "reason was: {reason}");
        }
        other => panic!("expected denial, got {other:?}"),
    }

    assert_eq!(harness.booking_repository.bookings().len(), 1);
    let checks = harness.check_log_repository.appended();
    assert_eq!(checks.len(), 2);
    assert!(!checks[1].result());
}

#[tokio::test]
async fn abutting_intervals_do_not_conflict() {
    let harness = create_harness(vec![confirmed_booking("101", "2024-03-01", "09:00", "10:00")]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "10:00", "11:00", "lesson"))
        .await
        .expect("check should succeed");

    assert!(decision.is_available());
    assert_eq!(harness.booking_repository.bookings().len(), 2);
}

#[tokio::test]
async fn overlapping_interval_is_denied() {
    let harness = create_harness(vec![confirmed_booking("101", "2024-03-01", "09:00", "10:00")]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "09:30", "10:30", "lesson"))
        .await
        .expect("check should succeed");

    assert!(!decision.is_available());
    assert_eq!(harness.booking_repository.bookings().len(), 1);
}

#[tokio::test]
async fn conflict_count_reflects_every_overlapping_booking() {
    let harness = create_harness(vec![
        confirmed_booking("101", "2024-03-01", "09:00", "10:00"),
        confirmed_booking("101", "2024-03-01", "09:00", "11:00"),
    ]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "09:30", "10:30", "lesson"))
        .await
        .expect("check should succeed");

    match decision {
        AvailabilityDecision::Denied { reason } => {
            assert!(reason.contains("conflicts: 2"), "reason was: {reason}");
        }
        other => panic!("expected denial, got {other:?}"),
    }
}

#[tokio::test]
async fn other_rooms_and_dates_never_conflict() {
    let harness = create_harness(vec![
        confirmed_booking("102", "2024-03-01", "09:00", "10:00"),
        confirmed_booking("101", "2024-03-02", "09:00", "10:00"),
    ]);

    let decision = harness
        .service
        .handle_check(lesson_command())
        .await
        .expect("check should succeed");

    assert!(decision.is_available());
}

#[tokio::test]
async fn start_before_opening_is_denied_regardless_of_conflicts() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "07:00", "09:00", "lesson"))
        .await
        .expect("check should succeed");

    assert_eq!(
        decision,
        AvailabilityDecision::Denied {
            reason: "room is open only from 08:00 to 20:00".to_string(),
        }
    );
    assert!(harness.booking_repository.bookings().is_empty());
}

#[tokio::test]
async fn end_after_closing_is_denied() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "19:00", "20:30", "lesson"))
        .await
        .expect("check should succeed");

    assert!(!decision.is_available());
}

#[tokio::test]
async fn whole_day_boundaries_are_allowed() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "08:00", "20:00", "lesson"))
        .await
        .expect("check should succeed");

    assert!(decision.is_available());
}

#[tokio::test]
async fn conflict_is_reported_before_business_hours() {
    // The seeded booking sits outside business hours; the ladder must still
    // report the conflict first.
    let harness = create_harness(vec![confirmed_booking("101", "2024-03-01", "07:00", "09:00")]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "07:00", "08:30", "lesson"))
        .await
        .expect("check should succeed");

    match decision {
        AvailabilityDecision::Denied { reason } => {
            assert!(reason.contains("conflicts"), "reason was: {reason}");
        }
        other => panic!("expected denial, got {other:?}"),
    }
}

#[tokio::test]
async fn business_hours_are_checked_before_booking_type() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "07:00", "09:00", "party"))
        .await
        .expect("check should succeed");

    assert_eq!(
        decision,
        AvailabilityDecision::Denied {
            reason: "room is open only from 08:00 to 20:00".to_string(),
        }
    );
}

#[tokio::test]
async fn unknown_booking_type_is_denied_with_the_valid_list() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "09:00", "10:00", "party"))
        .await
        .expect("check should succeed");

    match decision {
        AvailabilityDecision::Denied { reason } => {
            assert!(reason.contains("lesson, exam, meeting"), "reason was: {reason}");
        }
        other => panic!("expected denial, got {other:?}"),
    }
    assert!(harness.booking_repository.bookings().is_empty());
}

#[tokio::test]
async fn missing_fields_are_rejected_and_audited_with_sentinels() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(CheckAvailabilityCommand::new(
            None,
            Some("2024-03-01".to_string()),
            Some("09:00".to_string()),
            Some("10:00".to_string()),
            None,
        ))
        .await
        .expect("check should still be evaluated");

    assert_eq!(
        decision,
        AvailabilityDecision::Rejected {
            reason: "not all fields filled".to_string(),
        }
    );

    let checks = harness.check_log_repository.appended();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].room(), "N/A");
    assert_eq!(checks[0].booking_type(), "unknown");
    // fields that did arrive are audited as received
    assert_eq!(checks[0].time_start().format("%H:%M").to_string(), "09:00");
    assert!(!checks[0].result());
    assert!(harness.booking_repository.bookings().is_empty());
}

#[tokio::test]
async fn an_empty_string_counts_as_a_missing_field() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(CheckAvailabilityCommand::new(
            Some(String::new()),
            Some("2024-03-01".to_string()),
            Some("09:00".to_string()),
            Some("10:00".to_string()),
            Some("lesson".to_string()),
        ))
        .await
        .expect("check should still be evaluated");

    assert_eq!(
        decision,
        AvailabilityDecision::Rejected {
            reason: "not all fields filled".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_time_is_rejected_and_still_audited() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "9am", "10:00", "lesson"))
        .await
        .expect("check should still be evaluated");

    assert_eq!(
        decision,
        AvailabilityDecision::Rejected {
            reason: "invalid time format, use HH:MM".to_string(),
        }
    );

    let checks = harness.check_log_repository.appended();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].time_start().format("%H:%M").to_string(), "00:00");
    assert!(harness.booking_repository.bookings().is_empty());
}

#[tokio::test]
async fn malformed_date_is_rejected_and_still_audited() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "03/01/2024", "09:00", "10:00", "lesson"))
        .await
        .expect("check should still be evaluated");

    assert_eq!(
        decision,
        AvailabilityDecision::Rejected {
            reason: "invalid date format, use YYYY-MM-DD".to_string(),
        }
    );
    assert_eq!(harness.check_log_repository.appended().len(), 1);
}

#[tokio::test]
async fn single_digit_hours_parse_like_their_padded_form() {
    let harness = create_harness(vec![]);

    let decision = harness
        .service
        .handle_check(check_command("101", "2024-03-01", "9:00", "10:00", "lesson"))
        .await
        .expect("check should succeed");

    assert!(decision.is_available());
    let bookings = harness.booking_repository.bookings();
    assert_eq!(bookings[0].time_start().format("%H:%M").to_string(), "09:00");
}

#[tokio::test]
async fn every_branch_appends_exactly_one_audit_row() {
    let harness = create_harness(vec![]);

    // granted
    harness
        .service
        .handle_check(lesson_command())
        .await
        .expect("check should succeed");
    // conflict
    harness
        .service
        .handle_check(lesson_command())
        .await
        .expect("check should succeed");
    // business hours
    harness
        .service
        .handle_check(check_command("101", "2024-03-01", "07:00", "08:30", "lesson"))
        .await
        .expect("check should succeed");
    // unknown type
    harness
        .service
        .handle_check(check_command("101", "2024-03-01", "11:00", "12:00", "party"))
        .await
        .expect("check should succeed");
    // malformed
    harness
        .service
        .handle_check(CheckAvailabilityCommand::new(None, None, None, None, None))
        .await
        .expect("check should still be evaluated");

    assert_eq!(harness.check_log_repository.appended().len(), 5);
    assert_eq!(harness.booking_repository.bookings().len(), 1);
}
