use crate::booking::domain::model::enums::booking_domain_error::BookingDomainError;

/// All six fields are required; an empty string counts as missing. Date and
/// time stay raw strings — the Gateway forwards them to the Authority
/// untouched and only parses after the slot is confirmed.
#[derive(Clone, Debug)]
pub struct CreateBookingCommand {
    room: String,
    date: String,
    time_start: String,
    time_end: String,
    booking_type: String,
    user_email: String,
}

impl CreateBookingCommand {
    pub fn new(
        room: Option<String>,
        date: Option<String>,
        time_start: Option<String>,
        time_end: Option<String>,
        booking_type: Option<String>,
        user_email: Option<String>,
    ) -> Result<Self, BookingDomainError> {
        match (
            required(room),
            required(date),
            required(time_start),
            required(time_end),
            required(booking_type),
            required(user_email),
        ) {
            (
                Some(room),
                Some(date),
                Some(time_start),
                Some(time_end),
                Some(booking_type),
                Some(user_email),
            ) => Ok(Self {
                room,
                date,
                time_start,
                time_end,
                booking_type,
                user_email,
            }),
            _ => Err(BookingDomainError::MissingFields),
        }
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time_start(&self) -> &str {
        &self.time_start
    }

    pub fn time_end(&self) -> &str {
        &self.time_end
    }

    pub fn booking_type(&self) -> &str {
        &self.booking_type
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
