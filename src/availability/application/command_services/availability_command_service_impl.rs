use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{info, warn};

use crate::availability::{
    domain::{
        model::{
            commands::check_availability_command::CheckAvailabilityCommand,
            entities::{
                availability_check_record::AvailabilityCheckRecord,
                confirmed_booking::ConfirmedBooking,
            },
            enums::{
                availability_decision::AvailabilityDecision,
                availability_domain_error::AvailabilityDomainError,
                booking_type::BookingType,
            },
        },
        services::availability_command_service::AvailabilityCommandService,
    },
    infrastructure::persistence::repositories::{
        availability_check_log_repository::AvailabilityCheckLogRepository,
        confirmed_booking_repository::ConfirmedBookingRepository,
    },
};

const SENTINEL_ROOM: &str = "N/A";
const SENTINEL_TYPE: &str = "unknown";

pub struct AvailabilityCommandServiceImpl {
    booking_repository: Arc<dyn ConfirmedBookingRepository>,
    check_log_repository: Arc<dyn AvailabilityCheckLogRepository>,
}

impl AvailabilityCommandServiceImpl {
    pub fn new(
        booking_repository: Arc<dyn ConfirmedBookingRepository>,
        check_log_repository: Arc<dyn AvailabilityCheckLogRepository>,
    ) -> Self {
        Self {
            booking_repository,
            check_log_repository,
        }
    }

    async fn append_audit(
        &self,
        room: &str,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
        booking_type: &str,
        result: bool,
        reason: &str,
    ) -> Result<(), AvailabilityDomainError> {
        self.check_log_repository
            .append(&AvailabilityCheckRecord::new(
                room,
                date,
                time_start,
                time_end,
                booking_type,
                result,
                reason,
                Utc::now(),
            ))
            .await
    }
}

#[async_trait]
impl AvailabilityCommandService for AvailabilityCommandServiceImpl {
    /// The decision ladder. Order is significant and the first failing rule
    /// terminates the check; every branch, success or failure, appends
    /// exactly one audit row.
    async fn handle_check(
        &self,
        command: CheckAvailabilityCommand,
    ) -> Result<AvailabilityDecision, AvailabilityDomainError> {
        info!(
            room = command.room().unwrap_or(SENTINEL_ROOM),
            date = command.date().unwrap_or("-"),
            time_start = command.time_start().unwrap_or("-"),
            time_end = command.time_end().unwrap_or("-"),
            booking_type = command.booking_type().unwrap_or(SENTINEL_TYPE),
            "availability check received"
        );

        let (Some(room), Some(date_raw), Some(time_start_raw), Some(time_end_raw), Some(type_raw)) = (
            command.room(),
            command.date(),
            command.time_start(),
            command.time_end(),
            command.booking_type(),
        ) else {
            let reason = "not all fields filled";
            warn!(reason, "availability check rejected");
            // Sentinels substitute only what could not be read; fields that
            // did arrive are recorded as received.
            self.append_audit(
                command.room().unwrap_or(SENTINEL_ROOM),
                parse_date_or_today(command.date()),
                parse_time_or_midnight(command.time_start()),
                parse_time_or_midnight(command.time_end()),
                command.booking_type().unwrap_or(SENTINEL_TYPE),
                false,
                reason,
            )
            .await?;
            return Ok(AvailabilityDecision::Rejected {
                reason: reason.to_string(),
            });
        };

        let Ok(date) = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d") else {
            let reason = "invalid date format, use YYYY-MM-DD";
            warn!(room, date = date_raw, reason, "availability check rejected");
            self.append_audit(
                room,
                Utc::now().date_naive(),
                parse_time_or_midnight(Some(time_start_raw)),
                parse_time_or_midnight(Some(time_end_raw)),
                type_raw,
                false,
                reason,
            )
            .await?;
            return Ok(AvailabilityDecision::Rejected {
                reason: reason.to_string(),
            });
        };

        let (Ok(time_start), Ok(time_end)) = (
            NaiveTime::parse_from_str(time_start_raw, "%H:%M"),
            NaiveTime::parse_from_str(time_end_raw, "%H:%M"),
        ) else {
            let reason = "invalid time format, use HH:MM";
            warn!(
                room,
                time_start = time_start_raw,
                time_end = time_end_raw,
                reason,
                "availability check rejected"
            );
            self.append_audit(room, date, NaiveTime::MIN, NaiveTime::MIN, type_raw, false, reason)
                .await?;
            return Ok(AvailabilityDecision::Rejected {
                reason: reason.to_string(),
            });
        };

        let conflicts = self
            .booking_repository
            .count_overlapping(room, date, time_start, time_end)
            .await?;
        if conflicts > 0 {
            let reason = format!("room is occupied at this time; conflicts: {conflicts}");
            warn!(room, %date, conflicts, "availability denied");
            self.append_audit(room, date, time_start, time_end, type_raw, false, &reason)
                .await?;
            return Ok(AvailabilityDecision::Denied { reason });
        }

        if time_start < opening_time() || time_end > closing_time() {
            let reason = "room is open only from 08:00 to 20:00".to_string();
            warn!(room, %time_start, %time_end, "availability denied outside business hours");
            self.append_audit(room, date, time_start, time_end, type_raw, false, &reason)
                .await?;
            return Ok(AvailabilityDecision::Denied { reason });
        }

        let Ok(booking_type) = BookingType::from_str(type_raw) else {
            let reason = format!(
                "unknown booking type; valid types: {}",
                BookingType::VALID_NAMES.join(", ")
            );
            warn!(room, booking_type = type_raw, "availability denied for unknown type");
            self.append_audit(room, date, time_start, time_end, type_raw, false, &reason)
                .await?;
            return Ok(AvailabilityDecision::Denied { reason });
        };

        // The canonical reservation is created here, in the same call that
        // evaluated the slot. There is no hold/confirm handshake.
        let booking = ConfirmedBooking::reserve(
            room.to_string(),
            date,
            time_start,
            time_end,
            booking_type,
            Utc::now(),
        );
        self.booking_repository.save(&booking).await?;
        self.append_audit(
            room,
            date,
            time_start,
            time_end,
            booking_type.as_str(),
            true,
            "room is available",
        )
        .await?;

        info!(booking_id = %booking.id(), room, %date, "slot reserved");

        Ok(AvailabilityDecision::Granted {
            message: "room is available for booking".to_string(),
        })
    }
}

fn parse_date_or_today(raw: Option<&str>) -> NaiveDate {
    raw.and_then(|value| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive())
}

fn parse_time_or_midnight(raw: Option<&str>) -> NaiveTime {
    raw.and_then(|value| NaiveTime::parse_from_str(value, "%H:%M").ok())
        .unwrap_or(NaiveTime::MIN)
}

fn opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("valid opening time")
}

fn closing_time() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 0, 0).expect("valid closing time")
}
