use uuid::Uuid;

/// Partial update: an absent field keeps the stored value. Unlike creation,
/// a present-but-empty string is applied as a value.
#[derive(Clone, Debug)]
pub struct UpdateBookingCommand {
    booking_id: Uuid,
    room: Option<String>,
    date: Option<String>,
    time_start: Option<String>,
    time_end: Option<String>,
    booking_type: Option<String>,
    user_email: Option<String>,
}

impl UpdateBookingCommand {
    pub fn new(
        booking_id: Uuid,
        room: Option<String>,
        date: Option<String>,
        time_start: Option<String>,
        time_end: Option<String>,
        booking_type: Option<String>,
        user_email: Option<String>,
    ) -> Self {
        Self {
            booking_id,
            room,
            date,
            time_start,
            time_end,
            booking_type,
            user_email,
        }
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn time_start(&self) -> Option<&str> {
        self.time_start.as_deref()
    }

    pub fn time_end(&self) -> Option<&str> {
        self.time_end.as_deref()
    }

    pub fn booking_type(&self) -> Option<&str> {
        self.booking_type.as_deref()
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }
}
