use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// One immutable audit row. Malformed requests are recorded too, with
/// sentinel values substituted for whatever could not be read: room "N/A",
/// today's date, 00:00 times, type "unknown".
#[derive(Clone, Debug)]
pub struct AvailabilityCheckRecord {
    id: Uuid,
    room: String,
    date: NaiveDate,
    time_start: NaiveTime,
    time_end: NaiveTime,
    booking_type: String,
    result: bool,
    reason: String,
    checked_at: DateTime<Utc>,
}

impl AvailabilityCheckRecord {
    pub fn new(
        room: impl Into<String>,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
        booking_type: impl Into<String>,
        result: bool,
        reason: impl Into<String>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            room: room.into(),
            date,
            time_start,
            time_end,
            booking_type: booking_type.into(),
            result,
            reason: reason.into(),
            checked_at,
        }
    }

    pub fn restore(
        id: Uuid,
        room: String,
        date: NaiveDate,
        time_start: NaiveTime,
        time_end: NaiveTime,
        booking_type: String,
        result: bool,
        reason: String,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room,
            date,
            time_start,
            time_end,
            booking_type,
            result,
            reason,
            checked_at,
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

    pub fn result(&self) -> bool {
        self.result
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }
}
