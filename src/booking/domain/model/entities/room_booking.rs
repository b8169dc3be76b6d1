use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// The Gateway's own denormalized booking record. Deliberately a separate
/// aggregate from the Authority's canonical booking: the two stores are
/// never reconciled, and `booking_type` stays a free string because the
/// Gateway itself never validates it.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomBooking {
    id: Uuid,
    room: String,
    date: NaiveDate,
    time_start: NaiveTime,
    time_end: NaiveTime,
    booking_type: String,
    user_email: String,
    created_at: DateTime<Utc>,
}

impl RoomBooking {
    pub fn new(
        room: String,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
        booking_type: String,
        user_email: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            room,
            date,
            time_start,
            time_end,
            booking_type,
            user_email,
            created_at,
        }
    }

    pub fn restore(
        id: Uuid,
        room: String,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
        booking_type: String,
        user_email: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room,
            date,
            time_start,
            time_end,
            booking_type,
            user_email,
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

    pub fn booking_type(&self) -> &str {
        &self.booking_type
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
