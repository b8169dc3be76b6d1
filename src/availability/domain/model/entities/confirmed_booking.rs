use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::availability::domain::model::enums::booking_type::BookingType;

/// The Authority's canonical reservation record. Created the moment a check
/// succeeds; there is no separate hold/confirm handshake.
#[derive(Clone, Debug)]
pub struct ConfirmedBooking {
    id: Uuid,
    room: String,
    date: NaiveDate,
    time_start: NaiveTime,
    time_end: NaiveTime,
    booking_type: BookingType,
    created_at: DateTime<Utc>,
}

impl ConfirmedBooking {
    pub fn reserve(
        room: String,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
        booking_type: BookingType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            room,
            date,
            time_start,
            time_end,
            booking_type,
            created_at,
        }
    }

    pub fn restore(
        id: Uuid,
        room: String,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
        booking_type: BookingType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room,
            date,
            time_start,
            time_end,
            booking_type,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time_start(&self) -> NaiveTime {
        self.time_start
    }

    pub fn time_end(&self) -> NaiveTime {
        self.time_end
    }

    pub fn booking_type(&self) -> BookingType {
        self.booking_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
