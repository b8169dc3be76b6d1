use chrono::{NaiveDate, NaiveTime, Utc};
use room_booking_api::availability::domain::model::{
    commands::check_availability_command::CheckAvailabilityCommand,
    entities::confirmed_booking::ConfirmedBooking,
    enums::booking_type::BookingType,
};

pub fn check_command(
    room: &str,
    date: &str,
    time_start: &str,
    time_end: &str,
    booking_type: &str,
) -> CheckAvailabilityCommand {
    CheckAvailabilityCommand::new(
        Some(room.to_string()),
        Some(date.to_string()),
        Some(time_start.to_string()),
        Some(time_end.to_string()),
        Some(booking_type.to_string()),
    )
}

pub fn lesson_command() -> CheckAvailabilityCommand {
    check_command("101", "2024-03-01", "09:00", "10:00", "lesson")
}

pub fn confirmed_booking(
    room: &str,
    date: &str,
    time_start: &str,
    time_end: &str,
) -> ConfirmedBooking {
    ConfirmedBooking::reserve(
        room.to_string(),
        NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid fixture date"),
        NaiveTime::parse_from_str(time_start, "%H:%M").expect("valid fixture time"),
        NaiveTime::parse_from_str(time_end, "%H:%M").expect("valid fixture time"),
        BookingType::Lesson,
        Utc::now(),
    )
}
