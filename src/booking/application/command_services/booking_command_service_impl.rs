use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{info, warn};

use crate::booking::{
    domain::{
        model::{
            commands::{
                create_booking_command::CreateBookingCommand,
                delete_booking_command::DeleteBookingCommand,
                update_booking_command::UpdateBookingCommand,
            },
            entities::room_booking::RoomBooking,
            enums::booking_domain_error::BookingDomainError,
        },
        services::booking_command_service::BookingCommandService,
    },
    infrastructure::persistence::repositories::room_booking_repository::RoomBookingRepository,
    interfaces::acl::availability_authority_facade::{
        AuthorityFacadeError, AvailabilityAuthorityFacade, AvailabilityQuery,
    },
};

pub struct BookingCommandServiceImpl {
    booking_repository: Arc<dyn RoomBookingRepository>,
    authority_facade: Arc<dyn AvailabilityAuthorityFacade>,
}

impl BookingCommandServiceImpl {
    pub fn new(
        booking_repository: Arc<dyn RoomBookingRepository>,
        authority_facade: Arc<dyn AvailabilityAuthorityFacade>,
    ) -> Self {
        Self {
            booking_repository,
            authority_facade,
        }
    }
}

#[async_trait]
impl BookingCommandService for BookingCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateBookingCommand,
    ) -> Result<RoomBooking, BookingDomainError> {
        let query = AvailabilityQuery {
            room: command.room().to_string(),
            date: command.date().to_string(),
            time_start: command.time_start().to_string(),
            time_end: command.time_end().to_string(),
            booking_type: command.booking_type().to_string(),
        };

        info!(
            room = query.room.as_str(),
            date = query.date.as_str(),
            "forwarding availability query to authority"
        );

        let decision = self
            .authority_facade
            .check_availability(&query)
            .await
            .map_err(map_facade_error)?;

        if !decision.available {
            let reason = decision.reason.unwrap_or_default();
            warn!(reason = reason.as_str(), "booking denied by authority");
            return Err(BookingDomainError::SlotUnavailable(reason));
        }

        // The Authority already parsed these before answering "available",
        // so failures here mean the upstream contract broke, not user error.
        let date = parse_date(command.date())?;
        let time_start = parse_time(command.time_start())?;
        let time_end = parse_time(command.time_end())?;

        let booking = RoomBooking::new(
            command.room().to_string(),
            date,
            time_start,
            time_end,
            command.booking_type().to_string(),
            command.user_email().to_string(),
            Utc::now(),
        );
        self.booking_repository.save(&booking).await?;

        info!(booking_id = %booking.id(), "booking created");

        Ok(booking)
    }

    async fn handle_update(
        &self,
        command: UpdateBookingCommand,
    ) -> Result<RoomBooking, BookingDomainError> {
        let existing = self
            .booking_repository
            .find_by_id(command.booking_id())
            .await?
            .ok_or(BookingDomainError::BookingNotFound)?;

        let room = command.room().unwrap_or(existing.room()).to_string();
        let date_raw = command
            .date()
            .map(ToString::to_string)
            .unwrap_or_else(|| existing.date().format("%Y-%m-%d").to_string());
        let time_start_raw = command
            .time_start()
            .map(ToString::to_string)
            .unwrap_or_else(|| existing.time_start().format("%H:%M").to_string());
        let time_end_raw = command
            .time_end()
            .map(ToString::to_string)
            .unwrap_or_else(|| existing.time_end().format("%H:%M").to_string());
        let booking_type = command
            .booking_type()
            .unwrap_or(existing.booking_type())
            .to_string();
        let user_email = command
            .user_email()
            .unwrap_or(existing.user_email())
            .to_string();

        // Identity comparison is raw string equality against the stored
        // values formatted back out, so "9:00" for a stored 09:00 triggers a
        // re-check even though the instant is the same.
        let identity_changed = room != existing.room()
            || date_raw != existing.date().format("%Y-%m-%d").to_string()
            || time_start_raw != existing.time_start().format("%H:%M").to_string()
            || time_end_raw != existing.time_end().format("%H:%M").to_string();

        if identity_changed {
            let query = AvailabilityQuery {
                room: room.clone(),
                date: date_raw.clone(),
                time_start: time_start_raw.clone(),
                time_end: time_end_raw.clone(),
                booking_type: booking_type.clone(),
            };

            info!(booking_id = %command.booking_id(), "re-checking availability before update");

            let decision = self
                .authority_facade
                .check_availability(&query)
                .await
                .map_err(|error| {
                    warn!(error = %error, "could not verify availability for update");
                    BookingDomainError::AvailabilityVerificationFailed
                })?;

            if !decision.available {
                return Err(BookingDomainError::SlotUnavailable(
                    decision.reason.unwrap_or_default(),
                ));
            }
        }

        let date = parse_date(&date_raw)?;
        let time_start = parse_time(&time_start_raw)?;
        let time_end = parse_time(&time_end_raw)?;

        let updated = RoomBooking::restore(
            existing.id(),
            room,
            date,
            time_start,
            time_end,
            booking_type,
            user_email,
            existing.created_at(),
        );
        self.booking_repository.update(&updated).await?;

        info!(booking_id = %updated.id(), "booking updated");

        Ok(updated)
    }

    async fn handle_delete(
        &self,
        command: DeleteBookingCommand,
    ) -> Result<(), BookingDomainError> {
        // The Authority is deliberately not told: its canonical record
        // survives this delete.
        let removed = self.booking_repository.delete(command.booking_id()).await?;
        if !removed {
            return Err(BookingDomainError::BookingNotFound);
        }

        info!(booking_id = %command.booking_id(), "booking deleted");

        Ok(())
    }
}

fn map_facade_error(error: AuthorityFacadeError) -> BookingDomainError {
    match error {
        AuthorityFacadeError::Timeout => BookingDomainError::AuthorityTimeout,
        AuthorityFacadeError::Connection(_) => BookingDomainError::AuthorityUnreachable,
        AuthorityFacadeError::UpstreamStatus { body, .. } => {
            BookingDomainError::AuthorityUpstreamError { details: body }
        }
        AuthorityFacadeError::InvalidResponse(message) => {
            BookingDomainError::InfrastructureError(message)
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, BookingDomainError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| BookingDomainError::InvalidDateFormat)
}

fn parse_time(raw: &str) -> Result<NaiveTime, BookingDomainError> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| BookingDomainError::InvalidTimeFormat)
}
