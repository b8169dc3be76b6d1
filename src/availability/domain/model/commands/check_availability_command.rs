/// The check request exactly as the caller sent it. Fields stay raw strings
/// on purpose: malformed requests must still travel through the decision
/// ladder and end up in the audit log, so nothing is validated here.
#[derive(Clone, Debug)]
pub struct CheckAvailabilityCommand {
    room: Option<String>,
    date: Option<String>,
    time_start: Option<String>,
    time_end: Option<String>,
    booking_type: Option<String>,
}

impl CheckAvailabilityCommand {
    pub fn new(
        room: Option<String>,
        date: Option<String>,
        time_start: Option<String>,
        time_end: Option<String>,
        booking_type: Option<String>,
    ) -> Self {
        Self {
            room: normalize(room),
            date: normalize(date),
            time_start: normalize(time_start),
            time_end: normalize(time_end),
            booking_type: normalize(booking_type),
        }
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
}

// An empty string counts as absent, same as a missing field.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
